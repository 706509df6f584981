//! Error-last (Go-style) surface.
//!
//! Run with: cargo run --example basic_go

use might_fail::go::{fail, might, might_fail};
use might_fail::Thrown;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

async fn divide(a: i64, b: i64) -> Result<i64, Thrown> {
    if b == 0 {
        return Err(serde_json::json!({ "message": "division by zero", "code": 22 }).into());
    }
    Ok(a / b)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (quotient, error) = might_fail(divide(10, 2)).await.into_tuple();
    info!(quotient = ?quotient, failed = error.is_some(), "10 / 2");

    let (quotient, error) = might_fail(divide(1, 0)).await.into_tuple();
    assert!(quotient.is_none());
    if let Some(error) = error {
        warn!(%error, origin = ?error.origin(), "1 / 0");
    }

    let (value, _) = might("ready").into_tuple();
    let (_, error) = fail::<()>("not ready").into_tuple();
    info!(value = ?value, error = ?error.map(|e| e.message()), "direct constructors");
}
