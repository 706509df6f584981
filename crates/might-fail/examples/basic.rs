//! Named-field surface over a simulated request.
//!
//! Run with: cargo run --example basic

use std::time::Duration;

use might_fail::{might_fail, might_fail_sync, Parts};
use serde_json::{json, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

async fn fetch_user(id: u32) -> Result<Value, String> {
    tokio::time::sleep(Duration::from_millis(50)).await;
    if id == 0 {
        return Err(format!("user {id} not found"));
    }
    Ok(json!({ "id": id, "name": "Ada" }))
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Parts { error, result } = might_fail(fetch_user(1)).await.into_parts();
    if let Some(user) = result {
        info!(%user, "fetched user");
    }
    assert!(error.is_none());

    let outcome = might_fail(fetch_user(0)).await;
    if let Some(error) = outcome.error() {
        warn!(%error, "lookup failed");
        println!("{}", error.trace());
    }

    let parse = || "not a number".parse::<u32>().map_err(|e| e.to_string());
    let parsed = might_fail_sync(parse);
    match parsed.into_parts() {
        Parts { result: Some(n), .. } => info!(n, "parsed"),
        Parts { error, .. } => warn!(error = ?error.map(|e| e.message()), "parse failed"),
    }
}
