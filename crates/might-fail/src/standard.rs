//! The default surface: read outcomes by field name.
//!
//! ```
//! use might_fail::standard::{might_fail_sync, Either};
//! use might_fail::Parts;
//!
//! let outcome: Either<u16> = might_fail_sync(|| "8080".parse::<u16>().map_err(|e| e.to_string()));
//! let Parts { error, result } = outcome.into_parts();
//! assert!(error.is_none());
//! assert_eq!(result, Some(8080));
//! ```
//!
//! Positional reads are error-first, like the [`tuple`](crate::tuple) surface.

use might_fail_core::Standard;

use crate::surface::{constructors, surface};

surface!(Standard);
constructors!();
