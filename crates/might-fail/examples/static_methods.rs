//! Batch combinators over several operations.
//!
//! Run with: cargo run --example static_methods

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use might_fail::{Batch, Thrown, MIGHT_FAIL};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn after(value: i32, millis: u64) -> BoxFuture<'static, Result<i32, Thrown>> {
    async move {
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Ok(value)
    }
    .boxed()
}

fn rejected(message: &'static str) -> BoxFuture<'static, Result<i32, Thrown>> {
    async move { Err(message.into()) }.boxed()
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let all = MIGHT_FAIL
        .all(vec![after(1, 30), after(2, 10), after(3, 20)])
        .await;
    info!(result = ?all.result(), "all");

    let race = MIGHT_FAIL.race(vec![after(42, 5), after(100, 100)]).await;
    info!(result = ?race.result(), "race");

    let any = MIGHT_FAIL
        .any(vec![rejected("E1"), after(200, 20), rejected("E2")])
        .await;
    info!(result = ?any.result(), "any");

    let none = MIGHT_FAIL.any(vec![rejected("E1"), rejected("E2")]).await;
    if let Some(error) = none.error() {
        info!(%error, branches = error.errors().len(), "any, all rejected");
    }

    let settled = MIGHT_FAIL
        .all_settled(vec![after(1, 0), rejected("X"), after(3, 0)])
        .await;
    for record in settled.result().into_iter().flatten() {
        let (value, reason) = (record.value(), record.reason());
        info!(status = %record.status(), ?value, ?reason, "settled");
    }

    let by_name = MIGHT_FAIL.batch("allSettled", vec![after(7, 0)]).await;
    let combinator = by_name.result().map(Batch::combinator);
    info!(?combinator, "by name");

    let unknown = MIGHT_FAIL.batch("withResolvers", vec![after(7, 0)]).await;
    info!(error = ?unknown.error().map(|e| e.message()), "unknown combinator");
}
