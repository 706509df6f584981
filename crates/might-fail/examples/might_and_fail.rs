//! Functions that return `Either` directly, built from `might` and `fail`.
//!
//! Run with: cargo run --example might_and_fail

use std::future::Future;

use might_fail::{fail, might, might_fail, Either, Error};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Stuff {
    ready: bool,
}

async fn some_function<F>(lookup: F) -> Either<Stuff>
where
    F: Future<Output = Result<Option<String>, Error>>,
{
    let (error, result) = might_fail(lookup).await.into_tuple();
    if let Some(error) = error {
        return fail(error);
    }
    let Some(Some(thing)) = result else {
        return fail(Error::msg("could not get the thing"));
    };
    info!(%thing, "got the thing");
    might(Stuff { ready: true })
}

async fn something() -> Either<&'static str> {
    let settled = async { Ok::<_, Error>("success") };
    let (error, result) = might_fail(settled).await.into_tuple();
    match (error, result) {
        (Some(error), _) => fail(error),
        (None, Some(value)) => might(value),
        (None, None) => fail("nothing settled"),
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lookup = async { Ok(Some(String::from("success"))) };
    let found = some_function(lookup).await;
    if let Some(stuff) = found.result() {
        info!(ready = stuff.ready, "found");
    }

    let missing = some_function(async { Ok(None) }).await;
    if let Some(error) = missing.error() {
        warn!(%error, "missing");
    }

    let lookup = async { Err(Error::msg("lookup failed")) };
    let broken = some_function(lookup).await;
    if let Some(error) = broken.error() {
        warn!(%error, "broken");
    }

    let value = something().await;
    info!(value = ?value.result(), "something");
}
