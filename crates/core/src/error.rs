//! The normalized error carried by every failed [`Either`](crate::Either).
//!
//! An [`Error`] is always a proper `std::error::Error`, never a raw string or
//! payload. It is cheap to clone (one `Arc`) and two clones of the same error
//! compare equal under [`Error::ptr_eq`].

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use strum::{Display, IntoStaticStr};
use thiserror::Error as ThisError;

/// Kind of value a coerced error was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Origin {
    /// A bare string.
    String,
    /// A structured value carrying a string `message`.
    Structured,
    /// A structured value without a usable message.
    Opaque,
    /// A primitive or empty value.
    Unknown,
}

/// What went wrong, independent of where.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An error that already existed outside this crate, passed through.
    #[error("{0}")]
    Foreign(Box<dyn StdError + Send + Sync>),

    /// An error built from a non-error failure value.
    #[error("{message}")]
    Coerced { message: String, origin: Origin },

    /// Every branch of an `any` batch failed.
    #[error("All promises were rejected")]
    Aggregate { errors: Vec<Error> },

    /// A batch combinator was requested by a name that does not exist.
    #[error("combinator `{name}` not found on might_fail")]
    UnknownCombinator { name: String },

    /// `race` was handed nothing to race.
    #[error("race over an empty set of operations never settles")]
    EmptyRace,
}

#[derive(Debug)]
struct Inner {
    kind: ErrorKind,
    location: Option<&'static Location<'static>>,
}

/// Normalized error type.
#[derive(Clone)]
pub struct Error {
    inner: Arc<Inner>,
}

impl Error {
    fn with_location(kind: ErrorKind, location: Option<&'static Location<'static>>) -> Self {
        Self {
            inner: Arc::new(Inner { kind, location }),
        }
    }

    /// Create an error from a message, located at the caller.
    #[must_use]
    #[track_caller]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::coerced(message, Origin::String, Location::caller())
    }

    /// Wrap an error from elsewhere without touching it.
    ///
    /// If `error` is itself an [`Error`] it is returned as-is.
    #[must_use]
    pub fn from_std<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    pub(crate) fn from_boxed(error: Box<dyn StdError + Send + Sync>) -> Self {
        match error.downcast::<Self>() {
            Ok(own) => *own,
            Err(foreign) => Self::with_location(ErrorKind::Foreign(foreign), None),
        }
    }

    pub(crate) fn coerced(
        message: impl Into<String>,
        origin: Origin,
        location: &'static Location<'static>,
    ) -> Self {
        Self::with_location(
            ErrorKind::Coerced {
                message: message.into(),
                origin,
            },
            Some(location),
        )
    }

    pub(crate) fn aggregate(errors: Vec<Self>, location: &'static Location<'static>) -> Self {
        Self::with_location(ErrorKind::Aggregate { errors }, Some(location))
    }

    pub(crate) fn unknown_combinator(
        name: impl Into<String>,
        location: &'static Location<'static>,
    ) -> Self {
        Self::with_location(
            ErrorKind::UnknownCombinator { name: name.into() },
            Some(location),
        )
    }

    pub(crate) fn empty_race(location: &'static Location<'static>) -> Self {
        Self::with_location(ErrorKind::EmptyRace, Some(location))
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// The rendered message.
    #[must_use]
    pub fn message(&self) -> String {
        self.inner.kind.to_string()
    }

    /// Call site that produced this error.
    ///
    /// `None` for errors passed through from elsewhere: their own diagnostics
    /// are left untouched.
    #[must_use]
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.inner.location
    }

    /// The origin of a coerced error, `None` for every other kind.
    #[must_use]
    pub fn origin(&self) -> Option<Origin> {
        match &self.inner.kind {
            ErrorKind::Coerced { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    /// Whether this is the aggregate failure of an `any` batch.
    #[must_use]
    pub fn is_aggregate(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::Aggregate { .. })
    }

    /// Individual errors of an aggregate, in input order. Empty otherwise.
    #[must_use]
    pub fn errors(&self) -> &[Self] {
        match &self.inner.kind {
            ErrorKind::Aggregate { errors } => errors,
            _ => &[],
        }
    }

    /// Borrow a passed-through foreign error as its concrete type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match &self.inner.kind {
            ErrorKind::Foreign(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Whether two errors are clones of the same instance.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Render a short diagnostic trace.
    ///
    /// The first line is `Error: <message>`. Coerced errors follow it with the
    /// caller's site, foreign errors with their source chain.
    #[must_use]
    pub fn trace(&self) -> String {
        let mut lines = vec![format!("Error: {self}")];
        if let Some(location) = self.inner.location {
            lines.push(format!(
                "    at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ));
        }
        let mut source = self.source();
        while let Some(cause) = source {
            lines.push(format!("    caused by: {cause}"));
            source = cause.source();
        }
        lines.join("\n")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.kind, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Error");
        debug.field("kind", &self.inner.kind);
        if let Some(location) = self.inner.location {
            debug.field("location", &format_args!("{location}"));
        }
        debug.finish()
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.inner.kind {
            ErrorKind::Foreign(error) => error.source(),
            _ => None,
        }
    }
}
