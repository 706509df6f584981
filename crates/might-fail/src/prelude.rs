//! Prelude module - common imports for might-fail
//!
//! Import this module to get the default surface and the extension traits:
//! ```rust
//! use might_fail::prelude::*;
//! ```

pub use might_fail_core::{EitherExt, Error, Parts, ResultExt, Settled, Slot, Thrown};

pub use crate::standard::{
    fail, make_might_fail, make_might_fail_sync, might, might_fail, might_fail_sync, Either,
    MIGHT_FAIL,
};
