//! Error-first tuple surface.
//!
//! ```
//! use might_fail::tuple::might_fail_sync;
//!
//! let (error, result) = might_fail_sync(|| Err::<u8, _>("boom")).into_tuple();
//! assert_eq!(error.map(|e| e.message()).as_deref(), Some("boom"));
//! assert!(result.is_none());
//! ```
//!
//! For error-last tuples use [`go`](crate::go).

use might_fail_core::Tuple;

use crate::surface::surface;

surface!(Tuple);
