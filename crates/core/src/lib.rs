//! # might-fail core
//!
//! Turns failing futures and closures into explicit [`Either`] values.
//!
//! ## Laws
//!
//! - Wrapping never panics and never propagates: errors and panics inside the
//!   wrapped operation become a failed `Either`
//! - Every failure carries a normalized [`Error`]
//! - An `Either` reads the same by name and by position
//!
//! ## Layout
//!
//! - [`error`] / [`thrown`] / [`normalize`]: failure values and their normalization
//! - [`either`] / [`layout`]: the dual-access outcome and its positional order
//! - [`wrap`]: the [`MightFail`] primitive
//! - [`combinator`]: `all`, `race`, `any`, `all_settled`
//! - [`result`]: extension traits

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod combinator;
pub mod either;
pub mod error;
pub mod layout;
mod normalize;
pub mod result;
pub mod thrown;
pub mod wrap;

pub use combinator::{Batch, Combinator, Settled, Status};
pub use either::{Either, Parts, Slot, SLOTS};
pub use error::{Error, ErrorKind, Origin};
pub use layout::{Go, Layout, Mode, Order, Standard, Tuple};
pub use normalize::normalize;
pub use result::{EitherExt, ResultExt};
pub use thrown::Thrown;
pub use wrap::{MightFail, MightFailFn, MightFailSyncFn};
