//! Bridges between `std::result::Result` and [`Either`].

use std::panic::Location;

use crate::either::Either;
use crate::error::Error;
use crate::layout::Layout;
use crate::normalize::normalize_at;
use crate::thrown::Thrown;

/// Convert any `Result` into an [`Either`], normalizing the error.
pub trait ResultExt<T> {
    #[track_caller]
    fn into_either<L: Layout>(self) -> Either<T, L>;
}

impl<T, E: Into<Thrown>> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn into_either<L: Layout>(self) -> Either<T, L> {
        let location = Location::caller();
        self.map_err(|error| normalize_at(error.into(), location)).into()
    }
}

/// Consumers for an [`Either`] that report failures through `tracing`
/// instead of dropping them silently.
pub trait EitherExt<T> {
    /// The result, if any. A failure is logged and becomes `None`.
    fn into_option_logged(self) -> Option<T>;

    /// The result, or `default` after logging the failure.
    fn or_default_logged(self, default: T) -> T;

    /// Run `f` on the error slot, if filled, and hand the outcome back.
    #[must_use]
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T, L: Layout> EitherExt<T> for Either<T, L> {
    fn into_option_logged(self) -> Option<T> {
        self.into_std()
            .map_err(|error| report(&error, "discarding failed outcome"))
            .ok()
    }

    fn or_default_logged(self, default: T) -> T {
        self.into_std().unwrap_or_else(|error| {
            report(&error, "failed outcome replaced by default");
            default
        })
    }

    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Some(error) = self.error() {
            f(error);
        }
        self
    }
}

fn report(error: &Error, action: &'static str) {
    match error.location() {
        Some(location) => tracing::error!(%error, %location, "{action}"),
        None => tracing::error!(%error, "{action}"),
    }
}
