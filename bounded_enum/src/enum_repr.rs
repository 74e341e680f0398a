// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The seam between a host enum and its underlying integer representation - see
//! [`EnumRepr`] trait.

use std::fmt::Debug;

/// Connects an enum to its underlying integer representation.
///
/// The representation is normalized to [i64] at this seam so that
/// [`BoundedEnum`](crate::BoundedEnum) can carry its bounds as const parameters
/// regardless of the enum's declared `#[repr(..)]` width.
///
/// Implementations must agree with the enum's discriminants in both directions:
/// `from_underlying(e.as_underlying()) == Some(e)` for every constant `e`, and
/// `from_underlying` returns `None` for any integer that names no constant.
///
/// Hand-written impls are fine, but for enums deriving
/// [`strum_macros::FromRepr`] the [`enum_repr!`](crate::enum_repr) macro writes
/// the impl in one line.
pub trait EnumRepr: Copy + PartialEq + Debug {
    /// The underlying integer value backing this constant.
    fn as_underlying(&self) -> i64;

    /// The constant whose underlying value equals `raw`, or `None` if no such
    /// constant exists.
    fn from_underlying(raw: i64) -> Option<Self>;
}

/// Implements [`EnumRepr`] for an enum that derives [`strum_macros::FromRepr`].
///
/// Takes the enum type and its `#[repr(..)]` integer type. Values outside the
/// repr type's range, and values inside it that name no constant, both map to
/// `None`.
///
/// ```
/// use r3bl_bounded_enum::{EnumRepr, enum_repr};
/// use strum_macros::FromRepr;
///
/// #[repr(i8)]
/// #[derive(Debug, Clone, Copy, PartialEq, FromRepr)]
/// enum Sign {
///     Neg = -1,
///     Pos = 1,
/// }
/// enum_repr!(Sign, i8);
///
/// assert_eq!(Sign::Neg.as_underlying(), -1);
/// assert_eq!(Sign::from_underlying(1), Some(Sign::Pos));
/// assert_eq!(Sign::from_underlying(0), None); // Hole in the domain.
/// ```
#[macro_export]
macro_rules! enum_repr {
    ($enum_type:ty, $repr_type:ty) => {
        impl $crate::EnumRepr for $enum_type {
            fn as_underlying(&self) -> i64 { (*self) as $repr_type as i64 }

            fn from_underlying(raw: i64) -> Option<Self> {
                <$repr_type as ::std::convert::TryFrom<i64>>::try_from(raw)
                    .ok()
                    .and_then(<$enum_type>::from_repr)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::EnumRepr;
    use pretty_assertions::assert_eq;
    use strum_macros::FromRepr;

    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, FromRepr)]
    enum Alphabet {
        A,
        B,
        C,
        D,
        E,
    }
    enum_repr!(Alphabet, u8);

    #[repr(i8)]
    #[derive(Debug, Clone, Copy, PartialEq, FromRepr)]
    enum Sign {
        Neg = -1,
        Pos = 1,
    }
    enum_repr!(Sign, i8);

    #[test]
    fn test_as_underlying_matches_discriminants() {
        assert_eq!(Alphabet::A.as_underlying(), 0);
        assert_eq!(Alphabet::D.as_underlying(), 3);
        assert_eq!(Sign::Neg.as_underlying(), -1);
        assert_eq!(Sign::Pos.as_underlying(), 1);
    }

    #[test]
    fn test_from_underlying_round_trips_every_constant() {
        for it in [Alphabet::A, Alphabet::B, Alphabet::C, Alphabet::D, Alphabet::E] {
            assert_eq!(Alphabet::from_underlying(it.as_underlying()), Some(it));
        }
    }

    #[test]
    fn test_from_underlying_rejects_values_naming_no_constant() {
        assert_eq!(Alphabet::from_underlying(5), None);
        assert_eq!(Alphabet::from_underlying(-1), None);
        // A hole between declared discriminants.
        assert_eq!(Sign::from_underlying(0), None);
    }

    #[test]
    fn test_from_underlying_rejects_values_outside_repr_width() {
        // 300 does not fit in u8, so the conversion fails before the variant lookup.
        assert_eq!(Alphabet::from_underlying(300), None);
        assert_eq!(Sign::from_underlying(i64::MIN), None);
    }
}
