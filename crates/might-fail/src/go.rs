//! Error-last tuple surface, the way Go returns errors.
//!
//! ```
//! use might_fail::go::{fail, might};
//!
//! let (result, error) = might(5).into_tuple();
//! assert_eq!(result, Some(5));
//! assert!(error.is_none());
//!
//! let (result, error) = fail::<u8>("error").into_tuple();
//! assert!(result.is_none());
//! assert_eq!(error.map(|e| e.message()).as_deref(), Some("error"));
//! ```

use might_fail_core::Go;

use crate::surface::{constructors, surface};

surface!(Go);
constructors!();
