// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A value of enum `E`, guaranteed always within a declared sub-range - see
//! [`BoundedEnum`] type.

use std::{fmt::Debug,
          ops::Deref,
          str::FromStr};

use crate::{EnumRepr, LegalValues, RangeCursor, RangeError};

/// A value of enum `E`, guaranteed always within `[MIN, MAX]`.
///
/// `MIN` and `MAX` are underlying integer values (see [`EnumRepr`]) naming the
/// inclusive bound constants, fixed at type-definition time. Every construction,
/// assignment, and step operation validates before mutating, so the range
/// invariant holds at every observable instant - there is no window where a
/// value is out of range and later fixed up.
///
/// `MIN <= MAX` is enforced by a const assertion: instantiating a reversed bound
/// pair fails to compile as soon as the instantiation is used.
///
/// # Examples
///
/// ```
/// use r3bl_bounded_enum::{BoundedEnum, RangeError, enum_repr};
/// use strum_macros::FromRepr;
///
/// #[repr(u8)]
/// #[derive(Debug, Clone, Copy, PartialEq, FromRepr)]
/// enum ChipConfig { LowPower, HighPower, Off, Uninitialised }
/// enum_repr!(ChipConfig, u8);
///
/// type ChipConfigBounded = BoundedEnum<ChipConfig, 0, 3>;
///
/// let mut config = ChipConfigBounded::new(); // Starts at the minimum.
/// assert_eq!(config.get(), ChipConfig::LowPower);
///
/// config.set_underlying(2)?;
/// assert_eq!(config.get(), ChipConfig::Off);
///
/// // Out-of-range assignment fails and leaves the prior value untouched.
/// assert!(config.set_underlying(9).is_err());
/// assert_eq!(config.underlying(), 2);
/// # Ok::<(), RangeError>(())
/// ```
#[derive(Copy, Clone)]
pub struct BoundedEnum<E: EnumRepr, const MIN: i64, const MAX: i64> {
    val: E,
}

impl<E: EnumRepr, const MIN: i64, const MAX: i64> Debug for BoundedEnum<E, MIN, MAX> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundedEnum<{MIN}, {MAX}>({:?})", self.val)
    }
}

mod constants {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> BoundedEnum<E, MIN, MAX> {
        /// Evaluated whenever an instantiation is used; a reversed bound pair is
        /// a compile-time error, not a runtime one.
        pub(super) const BOUNDS_VALID: () =
            assert!(MIN <= MAX, "BoundedEnum requires MIN <= MAX");

        /// Number of legal positions in the declared range.
        pub const COUNT: i64 = {
            let () = Self::BOUNDS_VALID;
            MAX - MIN + 1
        };

        /// Underlying value of the minimum bound constant.
        pub const MIN_UNDERLYING: i64 = MIN;

        /// Underlying value of the maximum bound constant.
        pub const MAX_UNDERLYING: i64 = MAX;

        /// The minimum bound as an `E` constant.
        ///
        /// # Panics
        ///
        /// If `MIN` names no constant of `E`. Bound parameters naming real
        /// constants is a precondition of the instantiation, checked here at
        /// the first use.
        #[must_use]
        pub fn min_enum() -> E {
            let () = Self::BOUNDS_VALID;
            E::from_underlying(MIN).expect("MIN must name a constant of E")
        }

        /// The maximum bound as an `E` constant.
        ///
        /// # Panics
        ///
        /// If `MAX` names no constant of `E` (see [`Self::min_enum`]).
        #[must_use]
        pub fn max_enum() -> E {
            let () = Self::BOUNDS_VALID;
            E::from_underlying(MAX).expect("MAX must name a constant of E")
        }
    }
}

mod construct {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> BoundedEnum<E, MIN, MAX> {
        /// Default construction: the value starts at the minimum bound. Never
        /// fails (see [`Self::min_enum`] for the instantiation precondition).
        #[must_use]
        pub fn new() -> Self {
            Self {
                val: Self::min_enum(),
            }
        }

        /// Validated construction from an underlying integer value.
        ///
        /// # Errors
        ///
        /// [`RangeError::OutOfRange`] when `raw` lies outside `[MIN, MAX]`, or
        /// when `raw` is inside the bounds but names no constant of `E` (a hole
        /// in a non-contiguous enum).
        pub fn try_from_underlying(raw: i64) -> Result<Self, RangeError> {
            let () = Self::BOUNDS_VALID;
            if !(MIN..=MAX).contains(&raw) {
                return Err(RangeError::OutOfRange {
                    value: raw,
                    min: MIN,
                    max: MAX,
                });
            }
            E::from_underlying(raw)
                .map(|val| Self { val })
                .ok_or(RangeError::OutOfRange {
                    value: raw,
                    min: MIN,
                    max: MAX,
                })
        }

        /// Validated construction from an `E` value.
        ///
        /// # Errors
        ///
        /// [`RangeError::OutOfRange`] when the value's underlying representation
        /// lies outside `[MIN, MAX]`.
        pub fn try_from_enum(val: E) -> Result<Self, RangeError> {
            Self::try_from_underlying(val.as_underlying())
        }

        /// Unchecked fast path for compile-time-known-valid literals.
        ///
        /// The value is caller-trusted and never re-validated: passing a
        /// constant outside `[MIN, MAX]` silently violates the range invariant.
        /// Prefer [`Self::try_from_enum`] anywhere the value is not a trusted
        /// in-range literal.
        #[must_use]
        pub fn from_enum_unchecked(val: E) -> Self {
            let () = Self::BOUNDS_VALID;
            Self { val }
        }
    }

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> Default for BoundedEnum<E, MIN, MAX> {
        fn default() -> Self { Self::new() }
    }

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> TryFrom<i64>
        for BoundedEnum<E, MIN, MAX>
    {
        type Error = RangeError;

        fn try_from(raw: i64) -> Result<Self, Self::Error> {
            Self::try_from_underlying(raw)
        }
    }
}

mod access {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> BoundedEnum<E, MIN, MAX> {
        /// The current `E` value; never fails.
        #[must_use]
        pub fn get(&self) -> E { self.val }

        /// The current value's underlying integer representation.
        #[must_use]
        pub fn underlying(&self) -> i64 { self.val.as_underlying() }

        /// Transfer the current value out, resetting `self` to the minimum
        /// bound. The source stays valid and usable - it is never left in an
        /// empty or partial state.
        pub fn take(&mut self) -> Self { std::mem::replace(self, Self::new()) }
    }

    // No `DerefMut`: writes must go through the validated assignment path.
    impl<E: EnumRepr, const MIN: i64, const MAX: i64> Deref for BoundedEnum<E, MIN, MAX> {
        type Target = E;

        fn deref(&self) -> &Self::Target { &self.val }
    }
}

mod mutate {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> BoundedEnum<E, MIN, MAX> {
        /// Validated assignment from an underlying integer value.
        ///
        /// # Errors
        ///
        /// [`RangeError::OutOfRange`] when `raw` lies outside `[MIN, MAX]`; the
        /// prior value is untouched on failure.
        pub fn set_underlying(&mut self, raw: i64) -> Result<(), RangeError> {
            *self = Self::try_from_underlying(raw)?;
            Ok(())
        }

        /// Validated assignment from an `E` value.
        ///
        /// # Errors
        ///
        /// Same contract as [`Self::set_underlying`].
        pub fn set(&mut self, val: E) -> Result<(), RangeError> {
            self.set_underlying(val.as_underlying())
        }

        /// Step to the next constant in place.
        ///
        /// Saturating-fail policy: stepping at the maximum does not wrap.
        ///
        /// # Errors
        ///
        /// [`RangeError::PastMax`] at the maximum bound; the value is untouched
        /// on failure.
        pub fn advance(&mut self) -> Result<(), RangeError> {
            let raw = self.underlying();
            if raw >= MAX {
                return Err(RangeError::PastMax { max: MAX });
            }
            self.set_underlying(raw + 1)
        }

        /// Step to the next constant, returning the pre-mutation value by copy
        /// (the postfix-increment form).
        ///
        /// # Errors
        ///
        /// Same contract as [`Self::advance`].
        pub fn advance_post(&mut self) -> Result<Self, RangeError> {
            let prior = *self;
            self.advance()?;
            Ok(prior)
        }

        /// Step to the previous constant in place.
        ///
        /// Saturating-fail policy: stepping at the minimum does not wrap.
        ///
        /// # Errors
        ///
        /// [`RangeError::PastMin`] at the minimum bound; the value is untouched
        /// on failure.
        pub fn retreat(&mut self) -> Result<(), RangeError> {
            let raw = self.underlying();
            if raw <= MIN {
                return Err(RangeError::PastMin { min: MIN });
            }
            self.set_underlying(raw - 1)
        }

        /// Step to the previous constant, returning the pre-mutation value by
        /// copy (the postfix-decrement form).
        ///
        /// # Errors
        ///
        /// Same contract as [`Self::retreat`].
        pub fn retreat_post(&mut self) -> Result<Self, RangeError> {
            let prior = *self;
            self.retreat()?;
            Ok(prior)
        }
    }
}

mod arithmetic {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> BoundedEnum<E, MIN, MAX> {
        /// Combine two instances' underlying values by addition and reconstruct
        /// through the validated path.
        ///
        /// # Errors
        ///
        /// [`RangeError::OutOfRange`] when the sum leaves `[MIN, MAX]`.
        pub fn checked_add(self, rhs: Self) -> Result<Self, RangeError> {
            Self::try_from_underlying(self.underlying().saturating_add(rhs.underlying()))
        }

        /// Combine two instances' underlying values by subtraction and
        /// reconstruct through the validated path.
        ///
        /// # Errors
        ///
        /// [`RangeError::OutOfRange`] when the difference leaves `[MIN, MAX]`.
        pub fn checked_sub(self, rhs: Self) -> Result<Self, RangeError> {
            Self::try_from_underlying(self.underlying().saturating_sub(rhs.underlying()))
        }
    }
}

mod cmp {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Covers same-instantiation equality and range-crossing comparison in one
    /// impl: two instances over the same `E` but different declared bounds
    /// compare by current value only. Bound mismatch is never an error.
    impl<E: EnumRepr, const MIN: i64, const MAX: i64, const RHS_MIN: i64, const RHS_MAX: i64>
        PartialEq<BoundedEnum<E, RHS_MIN, RHS_MAX>> for BoundedEnum<E, MIN, MAX>
    {
        fn eq(&self, other: &BoundedEnum<E, RHS_MIN, RHS_MAX>) -> bool {
            self.val == other.val
        }
    }

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> Eq for BoundedEnum<E, MIN, MAX> {}

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> PartialEq<E>
        for BoundedEnum<E, MIN, MAX>
    {
        fn eq(&self, other: &E) -> bool { self.val == *other }
    }
}

mod iterate {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> BoundedEnum<E, MIN, MAX> {
        /// Cursor seeded at the first legal position.
        #[must_use]
        pub fn begin() -> RangeCursor {
            let () = Self::BOUNDS_VALID;
            RangeCursor::new(MIN)
        }

        /// End sentinel, one past the last legal position (`MIN + COUNT`).
        #[must_use]
        pub fn end() -> RangeCursor {
            let () = Self::BOUNDS_VALID;
            RangeCursor::new(MAX + 1)
        }

        /// Iterator over every legal `E` constant of this instantiation, in
        /// underlying order. Each call produces a fresh, restartable sequence
        /// that enumerates the type's declared range - never a window around
        /// any instance's current value.
        #[must_use]
        pub fn values() -> LegalValues<E> { LegalValues::new(Self::begin(), Self::end()) }
    }
}

mod text_io {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Renders the underlying integer representation, not the symbolic name.
    impl<E: EnumRepr, const MIN: i64, const MAX: i64> std::fmt::Display
        for BoundedEnum<E, MIN, MAX>
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.underlying())
        }
    }

    /// Reads an integer and routes it through the validated underlying path, so
    /// malformed and out-of-range input surface the same [`RangeError`].
    impl<E: EnumRepr, const MIN: i64, const MAX: i64> FromStr for BoundedEnum<E, MIN, MAX> {
        type Err = RangeError;

        fn from_str(input: &str) -> Result<Self, Self::Err> {
            let raw: i64 =
                input
                    .trim()
                    .parse()
                    .map_err(|_| RangeError::Unparsable {
                        input: input.to_string(),
                    })?;
            Self::try_from_underlying(raw)
        }
    }
}

mod serde_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

    impl<E: EnumRepr, const MIN: i64, const MAX: i64> Serialize for BoundedEnum<E, MIN, MAX> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_i64(self.underlying())
        }
    }

    /// Deserialization re-validates, so no input can smuggle in an out-of-range
    /// value.
    impl<'de, E: EnumRepr, const MIN: i64, const MAX: i64> Deserialize<'de>
        for BoundedEnum<E, MIN, MAX>
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = i64::deserialize(deserializer)?;
            Self::try_from_underlying(raw).map_err(D::Error::custom)
        }
    }
}
