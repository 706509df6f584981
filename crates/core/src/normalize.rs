//! Turning arbitrary failure values into a normalized [`Error`].

use std::any::Any;
use std::error::Error as StdError;
use std::panic::Location;

use serde_json::Value;

use crate::error::{Error, Origin};
use crate::thrown::Thrown;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Normalize any failure value into an [`Error`].
///
/// Classification, first match wins:
///
/// 1. an error type passes through unchanged;
/// 2. a string becomes the message;
/// 3. a structured value with a string `message` member lends that message;
/// 4. any other structured value is rendered as compact JSON;
/// 5. everything else becomes `"Unknown error"`.
///
/// Errors built in cases 2-5 are located at the caller of this function.
///
/// ```
/// use might_fail_core::normalize;
/// use serde_json::json;
///
/// assert_eq!(normalize("boom").message(), "boom");
/// assert_eq!(normalize(json!({ "message": "bad input" })).message(), "bad input");
/// assert_eq!(normalize(json!(4)).message(), "Unknown error");
/// ```
#[must_use]
#[track_caller]
pub fn normalize(input: impl Into<Thrown>) -> Error {
    normalize_at(input.into(), Location::caller())
}

pub(crate) fn normalize_at(thrown: Thrown, location: &'static Location<'static>) -> Error {
    match thrown {
        Thrown::Error(error) => error,
        Thrown::Foreign(error) => Error::from_boxed(error),
        Thrown::Message(message) => coerce(message, Origin::String, location),
        Thrown::Value(value) => from_value(value, location),
        Thrown::Panic(payload) => from_panic(payload, location),
        Thrown::Nothing => coerce(UNKNOWN_ERROR, Origin::Unknown, location),
    }
}

fn from_value(value: Value, location: &'static Location<'static>) -> Error {
    match value {
        Value::String(message) => coerce(message, Origin::String, location),
        Value::Object(ref fields) => match fields.get("message") {
            Some(Value::String(message)) => coerce(message.clone(), Origin::Structured, location),
            _ => coerce(value.to_string(), Origin::Opaque, location),
        },
        Value::Array(_) => coerce(value.to_string(), Origin::Opaque, location),
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            coerce(UNKNOWN_ERROR, Origin::Unknown, location)
        }
    }
}

fn from_panic(payload: Box<dyn Any + Send>, location: &'static Location<'static>) -> Error {
    tracing::debug!(%location, "caught panic inside wrapped operation");

    let payload = match payload.downcast::<Error>() {
        Ok(error) => return *error,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Box<dyn StdError + Send + Sync>>() {
        Ok(error) => return Error::from_boxed(*error),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<String>() {
        Ok(message) => return coerce(*message, Origin::String, location),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<&'static str>() {
        Ok(message) => return coerce(*message, Origin::String, location),
        Err(payload) => payload,
    };
    match payload.downcast::<Value>() {
        Ok(value) => from_value(*value, location),
        Err(_) => coerce(UNKNOWN_ERROR, Origin::Unknown, location),
    }
}

fn coerce(
    message: impl Into<String>,
    origin: Origin,
    location: &'static Location<'static>,
) -> Error {
    let error = Error::coerced(message, origin, location);
    tracing::debug!(%origin, %location, message = %error, "coerced failure value into error");
    error
}
