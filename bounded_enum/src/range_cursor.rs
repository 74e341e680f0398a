// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Forward-only position walker over underlying integer offsets - see [`RangeCursor`],
//! and its [`Iterator`] adapter [`LegalValues`].

use std::marker::PhantomData;

use crate::EnumRepr;

/// A minimal forward-only walker over underlying integer positions.
///
/// A cursor is always seeded with a starting position - there is no meaningful
/// "uninitialized cursor", so the type has no [`Default`]. The cursor itself
/// performs no upper-bound check; the consumer compares against an end sentinel
/// (see [`BoundedEnum::end`]) and stops on equality. Advancing past the
/// sentinel is permitted but the resulting position no longer names an enum
/// constant.
///
/// [`BoundedEnum::end`]: crate::BoundedEnum::end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeCursor {
    position: i64,
}

impl RangeCursor {
    #[must_use]
    pub const fn new(position: i64) -> Self { Self { position } }

    /// The current position; does not mutate.
    #[must_use]
    pub const fn position(&self) -> i64 { self.position }

    /// Move forward by exactly 1.
    pub fn advance(&mut self) { self.position += 1; }
}

/// Iterator over every legal constant of a bounded enum instantiation.
///
/// Produced by [`BoundedEnum::values`]; owns a walking cursor and the end
/// sentinel, and yields each constant of the declared range exactly once, in
/// underlying order. The sequence is a property of the *type* (its declared
/// `[MIN, MAX]`), never of any particular instance's current value.
///
/// Assumes the enum domain is contiguous over the declared range; a hole ends
/// the iteration early.
///
/// [`BoundedEnum::values`]: crate::BoundedEnum::values
#[derive(Clone, Debug)]
pub struct LegalValues<E: EnumRepr> {
    cursor: RangeCursor,
    end: RangeCursor,
    _enum: PhantomData<E>,
}

impl<E: EnumRepr> LegalValues<E> {
    #[must_use]
    pub(crate) const fn new(begin: RangeCursor, end: RangeCursor) -> Self {
        Self {
            cursor: begin,
            end,
            _enum: PhantomData,
        }
    }
}

impl<E: EnumRepr> Iterator for LegalValues<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.end {
            return None;
        }
        let raw = self.cursor.position();
        self.cursor.advance();
        E::from_underlying(raw)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining =
            usize::try_from(self.end.position() - self.cursor.position()).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl<E: EnumRepr> ExactSizeIterator for LegalValues<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enum_repr;
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

    #[test]
    fn test_cursor_is_seeded_and_reads_back() {
        let cursor = RangeCursor::new(3);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_cursor_advances_by_exactly_one() {
        let mut cursor = RangeCursor::new(0);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_cursor_equality_is_structural_on_position() {
        assert_eq!(RangeCursor::new(5), RangeCursor::new(5));
        assert_ne!(RangeCursor::new(5), RangeCursor::new(6));
    }

    #[test]
    fn test_cursor_may_walk_past_a_sentinel() {
        // The cursor has no internal terminal state; bounds are the consumer's job.
        let mut cursor = RangeCursor::new(4);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_legal_values_walks_begin_to_end_sentinel() {
        let iter: LegalValues<Alphabet> =
            LegalValues::new(RangeCursor::new(0), RangeCursor::new(5));
        let collected: Vec<Alphabet> = iter.collect();
        assert_eq!(
            collected,
            vec![
                Alphabet::A,
                Alphabet::B,
                Alphabet::C,
                Alphabet::D,
                Alphabet::E
            ]
        );
    }

    #[test]
    fn test_legal_values_respects_a_truncated_range() {
        let iter: LegalValues<Alphabet> =
            LegalValues::new(RangeCursor::new(1), RangeCursor::new(5));
        let collected: Vec<Alphabet> = iter.collect();
        assert_eq!(
            collected,
            vec![Alphabet::B, Alphabet::C, Alphabet::D, Alphabet::E]
        );
    }

    #[test]
    fn test_legal_values_reports_exact_size() {
        let iter: LegalValues<Alphabet> =
            LegalValues::new(RangeCursor::new(1), RangeCursor::new(5));
        assert_eq!(iter.len(), 4);
    }

    #[test]
    fn test_legal_values_is_empty_when_begin_equals_end() {
        let mut iter: LegalValues<Alphabet> =
            LegalValues::new(RangeCursor::new(2), RangeCursor::new(2));
        assert_eq!(iter.next(), None);
    }
}
