//! Batch combinators hosted on [`MightFail`].
//!
//! `all`, `race`, `any` and `all_settled` drive their branches with the
//! `futures` crate's join, select and unordered-stream primitives and relabel
//! the outcome as an [`Either`]. A
//! panic inside one branch is that branch's failure. None of them propagates
//! anything past the returned value.

use std::future::Future;
use std::panic::Location;

use futures::future;
use futures::stream::{FuturesUnordered, StreamExt};
use itertools::Itertools;
use strum::{Display, EnumString, IntoStaticStr};

use crate::either::Either;
use crate::error::Error;
use crate::layout::Layout;
use crate::normalize::normalize_at;
use crate::thrown::Thrown;
use crate::wrap::{conclude, guarded, MightFail};

/// The fixed set of batch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum Combinator {
    #[strum(to_string = "all")]
    All,
    #[strum(to_string = "race")]
    Race,
    #[strum(to_string = "any")]
    Any,
    #[strum(to_string = "allSettled", serialize = "all_settled")]
    AllSettled,
}

/// Settlement status of one `all_settled` branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    Fulfilled,
    Rejected,
}

/// Per-branch record of `all_settled`.
///
/// The rejection reason is kept exactly as the branch produced it; it is not
/// normalized.
#[derive(Debug)]
pub enum Settled<T> {
    Fulfilled(T),
    Rejected(Thrown),
}

impl<T> Settled<T> {
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Fulfilled(_) => Status::Fulfilled,
            Self::Rejected(_) => Status::Rejected,
        }
    }

    #[must_use]
    pub const fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Fulfilled(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    #[must_use]
    pub const fn reason(&self) -> Option<&Thrown> {
        match self {
            Self::Fulfilled(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

impl<T> From<Result<T, Thrown>> for Settled<T> {
    fn from(outcome: Result<T, Thrown>) -> Self {
        match outcome {
            Ok(value) => Self::Fulfilled(value),
            Err(reason) => Self::Rejected(reason),
        }
    }
}

/// Output of a combinator selected by name, see [`MightFail::batch`].
#[derive(Debug)]
pub enum Batch<T> {
    All(Vec<T>),
    Race(T),
    Any(T),
    AllSettled(Vec<Settled<T>>),
}

impl<T> Batch<T> {
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        match self {
            Self::All(_) => Combinator::All,
            Self::Race(_) => Combinator::Race,
            Self::Any(_) => Combinator::Any,
            Self::AllSettled(_) => Combinator::AllSettled,
        }
    }
}

impl<L: Layout> MightFail<L> {
    /// Every operation's result in input order, or the first failure to settle.
    ///
    /// Branches still pending when a failure settles are dropped, which
    /// cancels them.
    #[track_caller]
    pub fn all<I, F, T, E>(self, operations: I) -> impl Future<Output = Either<Vec<T>, L>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Result<T, E>>,
        E: Into<Thrown>,
    {
        all_at(operations, Location::caller())
    }

    /// Whichever operation settles first, success or failure.
    ///
    /// An empty input fails at once rather than never settling. The losing
    /// branches are dropped, which cancels them.
    #[track_caller]
    pub fn race<I, F, T, E>(self, operations: I) -> impl Future<Output = Either<T, L>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Result<T, E>>,
        E: Into<Thrown>,
    {
        race_at(operations, Location::caller())
    }

    /// The first operation to succeed.
    ///
    /// Fails with an aggregate error, branch errors in input order, only if
    /// every operation fails. Branches still pending after the first success
    /// are dropped, which cancels them.
    #[track_caller]
    pub fn any<I, F, T, E>(self, operations: I) -> impl Future<Output = Either<T, L>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Result<T, E>>,
        E: Into<Thrown>,
    {
        any_at(operations, Location::caller())
    }

    /// Every operation's settlement in input order. Never fails.
    pub fn all_settled<I, F, T, E>(
        self,
        operations: I,
    ) -> impl Future<Output = Either<Vec<Settled<T>>, L>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Result<T, E>>,
        E: Into<Thrown>,
    {
        all_settled_in(operations)
    }

    /// Run the combinator called `name`.
    ///
    /// Accepts `all`, `race`, `any`, `allSettled` and `all_settled`. Any other
    /// name settles as a failure describing it.
    #[track_caller]
    pub fn batch<I, F, T, E>(
        self,
        name: &str,
        operations: I,
    ) -> impl Future<Output = Either<Batch<T>, L>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Result<T, E>>,
        E: Into<Thrown>,
    {
        let location = Location::caller();
        let selected = name
            .parse::<Combinator>()
            .map_err(|_| Error::unknown_combinator(name, location));
        if let Err(error) = &selected {
            tracing::warn!(%location, %error, "rejected batch call");
        }
        async move {
            match selected {
                Ok(Combinator::All) => all_at(operations, location)
                    .await
                    .map_success(Batch::All),
                Ok(Combinator::Race) => race_at(operations, location)
                    .await
                    .map_success(Batch::Race),
                Ok(Combinator::Any) => any_at(operations, location)
                    .await
                    .map_success(Batch::Any),
                Ok(Combinator::AllSettled) => all_settled_in(operations)
                    .await
                    .map_success(Batch::AllSettled),
                Err(error) => Either::from_error(error),
            }
        }
    }
}

async fn all_at<I, F, T, E, L>(
    operations: I,
    location: &'static Location<'static>,
) -> Either<Vec<T>, L>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: Into<Thrown>,
    L: Layout,
{
    let mut pending = operations
        .into_iter()
        .enumerate()
        .map(|(index, operation)| async move { (index, guarded(operation).await) })
        .collect::<FuturesUnordered<_>>();
    let count = pending.len();

    let mut fulfilled = Vec::with_capacity(count);
    while let Some((index, outcome)) = pending.next().await {
        match outcome {
            Ok(value) => fulfilled.push((index, value)),
            Err(thrown) => {
                tracing::trace!(
                    combinator = %Combinator::All,
                    count,
                    failed = index,
                    "batch settled"
                );
                return Either::from_error(normalize_at(thrown, location));
            }
        }
    }

    tracing::trace!(combinator = %Combinator::All, count, ok = true, "batch settled");
    Either::success(
        fulfilled
            .into_iter()
            .sorted_by_key(|(index, _)| *index)
            .map(|(_, value)| value)
            .collect(),
    )
}

async fn race_at<I, F, T, E, L>(
    operations: I,
    location: &'static Location<'static>,
) -> Either<T, L>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: Into<Thrown>,
    L: Layout,
{
    let branches = operations
        .into_iter()
        .map(|operation| Box::pin(guarded(operation)))
        .collect_vec();
    if branches.is_empty() {
        return Either::from_error(Error::empty_race(location));
    }
    let count = branches.len();
    let (outcome, winner, _losers) = future::select_all(branches).await;
    tracing::trace!(
        combinator = %Combinator::Race,
        count,
        winner,
        ok = outcome.is_ok(),
        "batch settled"
    );
    conclude(outcome, location)
}

async fn any_at<I, F, T, E, L>(
    operations: I,
    location: &'static Location<'static>,
) -> Either<T, L>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: Into<Thrown>,
    L: Layout,
{
    let mut pending = operations
        .into_iter()
        .enumerate()
        .map(|(index, operation)| async move { (index, guarded(operation).await) })
        .collect::<FuturesUnordered<_>>();
    let count = pending.len();

    let mut rejections = Vec::with_capacity(count);
    while let Some((index, outcome)) = pending.next().await {
        match outcome {
            Ok(value) => {
                tracing::trace!(
                    combinator = %Combinator::Any,
                    count,
                    winner = index,
                    "batch settled"
                );
                return Either::success(value);
            }
            Err(thrown) => rejections.push((index, normalize_at(thrown, location))),
        }
    }

    tracing::trace!(combinator = %Combinator::Any, count, ok = false, "batch settled");
    let errors = rejections
        .into_iter()
        .sorted_by_key(|(index, _)| *index)
        .map(|(_, error)| error)
        .collect();
    Either::from_error(Error::aggregate(errors, location))
}

async fn all_settled_in<I, F, T, E, L>(operations: I) -> Either<Vec<Settled<T>>, L>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: Into<Thrown>,
    L: Layout,
{
    let settled = future::join_all(operations.into_iter().map(guarded))
        .await
        .into_iter()
        .map(Settled::from)
        .collect_vec();
    tracing::trace!(
        combinator = %Combinator::AllSettled,
        count = settled.len(),
        "batch settled"
    );
    Either::success(settled)
}
