// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single error type raised when a value falls outside declared bounds - see
//! [`RangeError`].

/// Raised synchronously at the call site whenever an operation would take a
/// [`BoundedEnum`](crate::BoundedEnum) outside its declared `[MIN, MAX]` range.
///
/// Every variant carries the attempted value and/or the violated bound for
/// diagnostics. A failed operation performs no partial mutation: construction
/// leaves no value behind, and assignment leaves the target's prior value
/// untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, miette::Diagnostic)]
pub enum RangeError {
    #[error("value {value} is outside the declared range [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("cannot advance past the maximum {max}")]
    PastMax { max: i64 },

    #[error("cannot retreat past the minimum {min}")]
    PastMin { min: i64 },

    #[error("cannot parse {input:?} as an underlying integer value")]
    Unparsable { input: String },
}
