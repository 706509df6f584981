//! The dual-access outcome value.
//!
//! An [`Either`] holds exactly one of a result or an error. It can be read by
//! name ([`Either::error`], [`Either::result`], [`Either::into_parts`]) or by
//! position ([`Either::into_tuple`], [`Either::get`], [`Either::iter`]). The
//! positional order is chosen by the [`Layout`] parameter; both views always
//! agree on which slot is empty.
//!
//! # Examples
//!
//! ```
//! use might_fail_core::{Either, Go, Parts};
//!
//! let outcome: Either<i32> = Either::success(7);
//! let Parts { error, result } = outcome.into_parts();
//! assert!(error.is_none());
//! assert_eq!(result, Some(7));
//!
//! let outcome: Either<i32, Go> = Either::failure("boom");
//! let (result, error) = outcome.into_tuple();
//! assert!(result.is_none());
//! assert_eq!(error.map(|e| e.message()), Some("boom".to_owned()));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::panic::Location;

use crate::error::Error;
use crate::layout::{Layout, Order, Standard};
use crate::normalize::normalize_at;
use crate::thrown::Thrown;

/// Number of slots in every [`Either`].
pub const SLOTS: usize = 2;

/// Success or failure, addressable by name and by position.
pub struct Either<T, L: Layout = Standard> {
    outcome: Result<T, Error>,
    layout: PhantomData<L>,
}

/// Named destructuring target.
///
/// Exactly one field is `Some`.
#[derive(Debug, Clone)]
pub struct Parts<T> {
    pub error: Option<Error>,
    pub result: Option<T>,
}

/// One positional slot of an [`Either`].
#[derive(Debug)]
pub enum Slot<'a, T> {
    Error(&'a Error),
    Result(&'a T),
    Absent,
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<'a, T> Slot<'a, T> {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn as_error(&self) -> Option<&'a Error> {
        match self {
            Self::Error(error) => Some(*error),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_result(&self) -> Option<&'a T> {
        match self {
            Self::Result(result) => Some(*result),
            _ => None,
        }
    }
}

impl<T, L: Layout> Either<T, L> {
    /// A success carrying `value`.
    ///
    /// `()` and `None` are legitimate payloads; the outcome is still a success.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::from_outcome(Ok(value))
    }

    /// A failure, normalizing `input` first.
    #[must_use]
    #[track_caller]
    pub fn failure(input: impl Into<Thrown>) -> Self {
        Self::from_error(normalize_at(input.into(), Location::caller()))
    }

    /// A failure carrying an already normalized error.
    #[must_use]
    pub const fn from_error(error: Error) -> Self {
        Self::from_outcome(Err(error))
    }

    const fn from_outcome(outcome: Result<T, Error>) -> Self {
        Self {
            outcome,
            layout: PhantomData,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }

    /// The `error` field.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }

    /// The `result` field.
    #[must_use]
    pub fn result(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    /// Consume into the named view.
    #[must_use]
    pub fn into_parts(self) -> Parts<T> {
        match self.outcome {
            Ok(result) => Parts {
                error: None,
                result: Some(result),
            },
            Err(error) => Parts {
                error: Some(error),
                result: None,
            },
        }
    }

    /// Consume into the positional view, in this layout's order.
    #[must_use]
    pub fn into_tuple(self) -> L::Pair<T> {
        let Parts { error, result } = self.into_parts();
        L::arrange(error, result)
    }

    /// Always two.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        SLOTS
    }

    /// Both slots in positional order.
    #[must_use]
    pub fn slots(&self) -> [Slot<'_, T>; SLOTS] {
        let (error, result) = match &self.outcome {
            Ok(result) => (Slot::Absent, Slot::Result(result)),
            Err(error) => (Slot::Error(error), Slot::Absent),
        };
        match L::MODE.order() {
            Order::ErrorFirst => [error, result],
            Order::ErrorLast => [result, error],
        }
    }

    /// Positional access; `None` past the second slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Slot<'_, T>> {
        self.slots().get(index).copied()
    }

    pub fn iter(&self) -> std::array::IntoIter<Slot<'_, T>, SLOTS> {
        self.slots().into_iter()
    }

    /// Map over both slots in positional order.
    pub fn map_slots<U, F>(&self, f: F) -> [U; SLOTS]
    where
        F: FnMut(Slot<'_, T>) -> U,
    {
        self.slots().map(f)
    }

    /// Same outcome, different positional order.
    #[must_use]
    pub fn relayout<M: Layout>(self) -> Either<T, M> {
        Either::from_outcome(self.outcome)
    }

    #[must_use]
    pub fn into_std(self) -> Result<T, Error> {
        self.outcome
    }

    pub(crate) fn map_success<U>(self, f: impl FnOnce(T) -> U) -> Either<U, L> {
        Either::from_outcome(self.outcome.map(f))
    }
}

impl<'a, T, L: Layout> IntoIterator for &'a Either<T, L> {
    type Item = Slot<'a, T>;
    type IntoIter = std::array::IntoIter<Slot<'a, T>, SLOTS>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, L: Layout> From<Result<T, Error>> for Either<T, L> {
    fn from(outcome: Result<T, Error>) -> Self {
        Self::from_outcome(outcome)
    }
}

impl<T, L: Layout> From<Either<T, L>> for Result<T, Error> {
    fn from(either: Either<T, L>) -> Self {
        either.outcome
    }
}

impl<T: Clone, L: Layout> Clone for Either<T, L> {
    fn clone(&self) -> Self {
        Self::from_outcome(self.outcome.clone())
    }
}

impl<T: fmt::Debug, L: Layout> fmt::Debug for Either<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Either")
            .field("mode", &L::MODE)
            .field("error", &self.error())
            .field("result", &self.result())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;
    use crate::layout::{Go, Tuple};

    fn describe<T: fmt::Debug>(slot: Slot<'_, T>) -> String {
        match slot {
            Slot::Error(error) => format!("error:{error}"),
            Slot::Result(result) => format!("result:{result:?}"),
            Slot::Absent => "absent".to_owned(),
        }
    }

    #[test]
    fn test_success_named_view() {
        let outcome: Either<&str> = Either::success("success");
        assert!(outcome.is_success());
        assert_eq!(outcome.result(), Some(&"success"));
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_unit_success_is_not_failure() {
        let outcome: Either<()> = Either::success(());
        assert!(outcome.is_success());
        assert!(outcome.error().is_none());

        let outcome: Either<Option<u8>, Go> = Either::success(None);
        let (result, error) = outcome.into_tuple();
        assert_eq!(result, Some(None));
        assert!(error.is_none());
    }

    #[test]
    fn test_standard_positional_is_error_first() {
        let outcome: Either<i32> = Either::failure("bad");
        assert_eq!(outcome.map_slots(describe), ["error:bad", "absent"]);

        let (error, result) = outcome.into_tuple();
        assert_eq!(error.unwrap().message(), "bad");
        assert!(result.is_none());
    }

    #[test]
    fn test_tuple_positional_is_error_first() {
        let outcome: Either<i32, Tuple> = Either::success(3);
        assert_eq!(outcome.map_slots(describe), ["absent", "result:3"]);
    }

    #[test]
    fn test_go_positional_is_error_last() {
        let outcome: Either<i32, Go> = Either::success(3);
        assert_eq!(outcome.map_slots(describe), ["result:3", "absent"]);

        let outcome: Either<i32, Go> = Either::failure("bad");
        assert_eq!(outcome.map_slots(describe), ["absent", "error:bad"]);
    }

    #[test]
    fn test_sequence_introspection() {
        let outcome: Either<i32, Go> = Either::success(9);
        assert_eq!(outcome.len(), 2);
        assert_eq!(outcome.iter().count(), 2);
        let first = outcome.get(0).and_then(|s| s.as_result().copied());
        assert_eq!(first, Some(9));
        assert!(outcome.get(1).is_some_and(|s| s.is_absent()));
        assert!(outcome.get(2).is_none());

        let absent = (&outcome).into_iter().filter(Slot::is_absent).count();
        assert_eq!(absent, 1);
    }

    #[test]
    fn test_named_and_positional_agree() {
        let failed: Either<i32, Tuple> = Either::failure("x");
        let named_error = failed.error().map(Error::message);
        let positional = failed.get(0).and_then(|s| s.as_error());
        let positional_error = positional.map(Error::message);
        assert_eq!(named_error, positional_error);
    }

    #[test]
    fn test_relayout_keeps_outcome() {
        let standard: Either<i32> = Either::success(1);
        let go: Either<i32, Go> = standard.relayout();
        assert_eq!(go.into_tuple().0, Some(1));
    }

    #[test]
    fn test_std_result_round_trip() {
        let outcome: Either<u8> = Ok::<u8, Error>(4).into();
        let back: Result<u8, Error> = outcome.into();
        assert_eq!(back.ok(), Some(4));
    }

    #[test]
    fn test_failure_location_is_caller() {
        let (outcome, line) = (Either::<u8>::failure("here"), line!());
        let location = outcome.error().and_then(Error::location).unwrap();
        assert_eq!(location.file(), file!());
        assert_eq!(location.line(), line);
    }
}
