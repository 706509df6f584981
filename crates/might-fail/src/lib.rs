#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # might-fail
//!
//! Handle failing futures and closures without `?` chains or panics leaking
//! out: every call returns an [`Either`] that holds a result or a normalized
//! [`Error`].
//!
//! Three surfaces differ only in positional order:
//!
//! - [`standard`] (re-exported at the root): named fields, error-first tuple
//! - [`tuple`]: `(error, result)`
//! - [`go`]: `(result, error)`
//!
//! ```
//! use might_fail::{might_fail, Parts};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let Parts { error, result } = might_fail(async { Err::<u8, _>("offline") }).await.into_parts();
//! assert_eq!(error.map(|e| e.message()).as_deref(), Some("offline"));
//! assert!(result.is_none());
//! # }
//! ```
//!
//! Batch operations hang off the `MIGHT_FAIL` constant of each surface:
//!
//! ```ignore
//! let (results, error) = might_fail::go::MIGHT_FAIL.all(requests).await.into_tuple();
//! ```

pub mod go;
pub mod prelude;
pub mod standard;
mod surface;
pub mod tuple;

pub use might_fail_core::{
    normalize, Batch, Combinator, EitherExt, Error, ErrorKind, Go, Layout, MightFail, MightFailFn,
    MightFailSyncFn, Mode, Order, Origin, Parts, ResultExt, Settled, Slot, Standard, Status,
    Thrown, Tuple,
};
pub use standard::{
    fail, make_might_fail, make_might_fail_sync, might, might_fail, might_fail_sync, Either,
    MIGHT_FAIL,
};
