//! Positional ordering policies for [`Either`](crate::Either).
//!
//! One core, three shapes: the layout only decides in which order the two
//! slots appear when an `Either` is read positionally.

use strum::{Display, EnumString, IntoStaticStr};

use crate::error::Error;

/// The three adapter variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Named fields first; positional access is error-first.
    Standard,
    /// Error-first tuple.
    Tuple,
    /// Error-last tuple, like Go.
    Go,
}

/// Which slot comes first positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    ErrorFirst,
    ErrorLast,
}

impl Mode {
    #[must_use]
    pub const fn order(self) -> Order {
        match self {
            Self::Standard | Self::Tuple => Order::ErrorFirst,
            Self::Go => Order::ErrorLast,
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Standard {}
    impl Sealed for super::Tuple {}
    impl Sealed for super::Go {}
}

/// Type-level tag selecting a [`Mode`].
pub trait Layout: sealed::Sealed + 'static {
    const MODE: Mode;

    /// The pair returned by [`Either::into_tuple`](crate::Either::into_tuple).
    type Pair<T>;

    fn arrange<T>(error: Option<Error>, result: Option<T>) -> Self::Pair<T>;
}

/// `{ error, result }` first, `(error, result)` positionally.
#[derive(Debug)]
pub enum Standard {}

/// `(error, result)`.
#[derive(Debug)]
pub enum Tuple {}

/// `(result, error)`.
#[derive(Debug)]
pub enum Go {}

impl Layout for Standard {
    const MODE: Mode = Mode::Standard;
    type Pair<T> = (Option<Error>, Option<T>);

    fn arrange<T>(error: Option<Error>, result: Option<T>) -> Self::Pair<T> {
        (error, result)
    }
}

impl Layout for Tuple {
    const MODE: Mode = Mode::Tuple;
    type Pair<T> = (Option<Error>, Option<T>);

    fn arrange<T>(error: Option<Error>, result: Option<T>) -> Self::Pair<T> {
        (error, result)
    }
}

impl Layout for Go {
    const MODE: Mode = Mode::Go;
    type Pair<T> = (Option<T>, Option<Error>);

    fn arrange<T>(error: Option<Error>, result: Option<T>) -> Self::Pair<T> {
        (result, error)
    }
}
