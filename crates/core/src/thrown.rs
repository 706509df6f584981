//! Raw failure values, before normalization.

use std::any::Any;
use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;

use crate::error::Error;

/// Anything an operation can fail with.
///
/// This is the un-normalized form. [`normalize`](crate::normalize) turns it
/// into an [`Error`]; `all_settled` hands it back as received.
pub enum Thrown {
    /// An already normalized error.
    Error(Error),
    /// An error type from elsewhere.
    Foreign(Box<dyn StdError + Send + Sync>),
    /// A bare message.
    Message(String),
    /// A structured or primitive payload.
    Value(Value),
    /// The payload of a caught panic.
    Panic(Box<dyn Any + Send>),
    /// No value at all.
    Nothing,
}

impl Thrown {
    /// Box any error type. An [`Error`] is recovered as [`Thrown::Error`].
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from(Box::new(error) as Box<dyn StdError + Send + Sync>)
    }

    /// Message of a raw value that carries one, without normalizing it.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Error(error) => Some(error.message()),
            Self::Foreign(error) => Some(error.to_string()),
            Self::Message(message) => Some(message.clone()),
            Self::Value(Value::String(message)) => Some(message.clone()),
            Self::Value(_) | Self::Nothing => None,
            Self::Panic(payload) => payload
                .downcast_ref::<String>()
                .cloned()
                .or_else(|| payload.downcast_ref::<&str>().map(ToString::to_string)),
        }
    }

    /// Borrow the error if this is an error-typed value of type `E`.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            Self::Error(error) => error.downcast_ref::<E>(),
            Self::Foreign(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Foreign(error) => f.debug_tuple("Foreign").field(error).finish(),
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Panic(_) => f.write_str("Panic(..)"),
            Self::Nothing => f.write_str("Nothing"),
        }
    }
}

impl From<Error> for Thrown {
    fn from(error: Error) -> Self {
        Self::Error(error)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Thrown {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        match error.downcast::<Error>() {
            Ok(own) => Self::Error(*own),
            Err(foreign) => Self::Foreign(foreign),
        }
    }
}

impl From<anyhow::Error> for Thrown {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<Error>() {
            Ok(own) => Self::Error(own),
            Err(other) => Self::Foreign(other.into()),
        }
    }
}

impl From<std::io::Error> for Thrown {
    fn from(error: std::io::Error) -> Self {
        Self::Foreign(Box::new(error))
    }
}

impl From<String> for Thrown {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Thrown {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl From<Value> for Thrown {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Box<dyn Any + Send>> for Thrown {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self::Panic(payload)
    }
}

impl From<()> for Thrown {
    fn from((): ()) -> Self {
        Self::Nothing
    }
}

impl From<Infallible> for Thrown {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
