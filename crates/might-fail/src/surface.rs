//! Generates the per-layout public surface.

/// Expand the wrapping functions of one layout inside the calling module.
macro_rules! surface {
    ($layout:ty) => {
        use std::future::Future;

        use might_fail_core::{MightFail, MightFailFn, MightFailSyncFn, Thrown};

        /// The outcome type of this layout.
        pub type Either<T> = might_fail_core::Either<T, $layout>;

        /// The wrapping primitive of this layout, hosting `all`, `race`,
        /// `any`, `all_settled` and `batch`.
        pub const MIGHT_FAIL: MightFail<$layout> = MightFail::new();

        /// Await `future` and capture its outcome in an [`Either`].
        #[track_caller]
        pub fn might_fail<F, T, E>(future: F) -> impl Future<Output = Either<T>>
        where
            F: Future<Output = Result<T, E>>,
            E: Into<Thrown>,
        {
            MIGHT_FAIL.call(future)
        }

        /// Run `f` and capture its outcome in an [`Either`].
        #[track_caller]
        pub fn might_fail_sync<F, T, E>(f: F) -> Either<T>
        where
            F: FnOnce() -> Result<T, E>,
            E: Into<Thrown>,
        {
            MIGHT_FAIL.call_sync(f)
        }

        /// Wrap a future-returning function so its calls yield [`Either`]s.
        pub fn make_might_fail<F>(func: F) -> MightFailFn<F, $layout> {
            MIGHT_FAIL.make(func)
        }

        /// Wrap a fallible function so its calls yield [`Either`]s.
        pub fn make_might_fail_sync<F>(func: F) -> MightFailSyncFn<F, $layout> {
            MIGHT_FAIL.make_sync(func)
        }
    };
}

/// Expand the direct constructors `might` and `fail`.
macro_rules! constructors {
    () => {
        /// A success carrying `value`.
        #[must_use]
        pub fn might<T>(value: T) -> Either<T> {
            Either::success(value)
        }

        /// A failure carrying the normalized `input`.
        #[must_use]
        #[track_caller]
        pub fn fail<T>(input: impl Into<Thrown>) -> Either<T> {
            Either::failure(input)
        }
    };
}

pub(crate) use constructors;
pub(crate) use surface;
