// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_bounded_enum
//!
//! A single reusable generic wrapper, [`BoundedEnum`], that restricts a host enum value
//! to a closed sub-range `[MIN, MAX]` of its underlying integer representation. The
//! restriction is enforced on every construction, assignment, and step operation, so a
//! value of this type is in range at every observable instant.
//!
//! The companion [`RangeCursor`] walks the underlying positions of the legal range, and
//! [`LegalValues`] adapts a begin/end cursor pair into a regular [`Iterator`] over the
//! enum constants themselves.
//!
//! Any enum can participate by implementing the [`EnumRepr`] seam trait. For enums that
//! derive [`strum_macros::FromRepr`], the [`enum_repr!`] macro writes the impl:
//!
//! ```
//! use r3bl_bounded_enum::{BoundedEnum, RangeError, enum_repr};
//! use strum_macros::FromRepr;
//!
//! #[repr(u8)]
//! #[derive(Debug, Clone, Copy, PartialEq, FromRepr)]
//! enum Alphabet { A, B, C, D, E }
//! enum_repr!(Alphabet, u8);
//!
//! type FullRange = BoundedEnum<Alphabet, 0, 4>;
//!
//! let mut it = FullRange::try_from_underlying(3)?;
//! assert_eq!(it.get(), Alphabet::D);
//! assert_eq!(it.underlying(), 3);
//!
//! it.advance()?;
//! assert_eq!(it, Alphabet::E);
//! assert!(it.advance().is_err()); // Saturating-fail at the maximum.
//!
//! // The legal range is a property of the type, not of any one value.
//! let all: Vec<Alphabet> = FullRange::values().collect();
//! assert_eq!(all.len() as i64, FullRange::COUNT);
//! # Ok::<(), RangeError>(())
//! ```
//!
//! Failed operations never mutate: an out-of-range assignment leaves the prior value
//! untouched, and surfaces the one error type this crate has, [`RangeError`].

// Attach.
pub mod bounded;
pub mod enum_repr;
pub mod range_cursor;
pub mod range_error;

// Re-export.
pub use bounded::*;
pub use enum_repr::*;
pub use range_cursor::*;
pub use range_error::*;
