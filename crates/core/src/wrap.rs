//! Wrapping fallible operations into [`Either`] values.
//!
//! [`MightFail`] is the entry point. It is a zero-sized handle, parameterized
//! by a [`Layout`], that turns futures and closures into `Either`s and hosts
//! the batch combinators (see [`combinator`](crate::combinator)).
//!
//! Nothing here panics or propagates: errors and panics inside the wrapped
//! operation are caught and normalized.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe, Location};

use futures::FutureExt;

use crate::either::Either;
use crate::layout::{Layout, Standard};
use crate::normalize::normalize_at;
use crate::thrown::Thrown;

/// The wrapping primitive for layout `L`.
pub struct MightFail<L: Layout = Standard> {
    layout: PhantomData<L>,
}

impl<L: Layout> MightFail<L> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: PhantomData,
        }
    }

    /// Await `future` and capture its outcome.
    ///
    /// A panic while polling counts as a failure.
    #[track_caller]
    pub fn call<F, T, E>(self, future: F) -> impl Future<Output = Either<T, L>>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<Thrown>,
    {
        settle(guarded(future), Location::caller())
    }

    /// Run `f` now and capture its outcome.
    ///
    /// A panic inside `f` counts as a failure.
    #[track_caller]
    pub fn call_sync<F, T, E>(self, f: F) -> Either<T, L>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Thrown>,
    {
        let location = Location::caller();
        let outcome = match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(outcome) => outcome.map_err(Into::into),
            Err(payload) => Err(Thrown::Panic(payload)),
        };
        conclude(outcome, location)
    }

    /// A success carrying `value`.
    #[must_use]
    pub fn success<T>(self, value: T) -> Either<T, L> {
        Either::success(value)
    }

    /// A failure carrying the normalized `input`.
    #[must_use]
    #[track_caller]
    pub fn failure<T>(self, input: impl Into<Thrown>) -> Either<T, L> {
        Either::failure(input)
    }

    /// Adapt a future-returning function so that it yields `Either`s.
    pub fn make<F>(self, func: F) -> MightFailFn<F, L> {
        MightFailFn {
            func,
            layout: PhantomData,
        }
    }

    /// Adapt a fallible function so that it yields `Either`s.
    pub fn make_sync<F>(self, func: F) -> MightFailSyncFn<F, L> {
        MightFailSyncFn {
            func,
            layout: PhantomData,
        }
    }
}

impl<L: Layout> Default for MightFail<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Layout> Clone for MightFail<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Layout> Copy for MightFail<L> {}

impl<L: Layout> fmt::Debug for MightFail<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MightFail").field("mode", &L::MODE).finish()
    }
}

/// A future-returning function whose calls yield [`Either`]s.
///
/// Built by [`MightFail::make`]. Several arguments are passed as a tuple.
pub struct MightFailFn<F, L: Layout = Standard> {
    func: F,
    layout: PhantomData<L>,
}

impl<F, L: Layout> MightFailFn<F, L> {
    /// Call the wrapped function.
    ///
    /// A panic raised while the function builds its future is absorbed the
    /// same way as one raised while the future runs.
    #[track_caller]
    pub fn call<A, Fut, T, E>(&self, args: A) -> impl Future<Output = Either<T, L>>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<Thrown>,
    {
        let location = Location::caller();
        let started = panic::catch_unwind(AssertUnwindSafe(|| (self.func)(args)));
        async move {
            match started {
                Ok(future) => settle(guarded(future), location).await,
                Err(payload) => conclude(Err(Thrown::Panic(payload)), location),
            }
        }
    }

    pub fn into_inner(self) -> F {
        self.func
    }
}

/// A fallible function whose calls yield [`Either`]s.
///
/// Built by [`MightFail::make_sync`]. Several arguments are passed as a tuple.
pub struct MightFailSyncFn<F, L: Layout = Standard> {
    func: F,
    layout: PhantomData<L>,
}

impl<F, L: Layout> MightFailSyncFn<F, L> {
    #[track_caller]
    pub fn call<A, T, E>(&self, args: A) -> Either<T, L>
    where
        F: Fn(A) -> Result<T, E>,
        E: Into<Thrown>,
    {
        MightFail::<L>::new().call_sync(|| (self.func)(args))
    }

    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F: Clone, L: Layout> Clone for MightFailFn<F, L> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            layout: PhantomData,
        }
    }
}

impl<F: Clone, L: Layout> Clone for MightFailSyncFn<F, L> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            layout: PhantomData,
        }
    }
}

/// `future` with panics turned into [`Thrown::Panic`] and errors into [`Thrown`].
pub(crate) fn guarded<F, T, E>(future: F) -> impl Future<Output = Result<T, Thrown>>
where
    F: Future<Output = Result<T, E>>,
    E: Into<Thrown>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .map(|caught| match caught {
            Ok(outcome) => outcome.map_err(Into::into),
            Err(payload) => Err(Thrown::Panic(payload)),
        })
}

pub(crate) async fn settle<F, T, L>(future: F, site: &'static Location<'static>) -> Either<T, L>
where
    F: Future<Output = Result<T, Thrown>>,
    L: Layout,
{
    conclude(future.await, site)
}

pub(crate) fn conclude<T, L: Layout>(
    outcome: Result<T, Thrown>,
    location: &'static Location<'static>,
) -> Either<T, L> {
    outcome
        .map_err(|thrown| normalize_at(thrown, location))
        .into()
}
