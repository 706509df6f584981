//! Wrapping functions once and calling them many times.
//!
//! Run with: cargo run --example make_might_fail

use std::time::Duration;

use might_fail::{make_might_fail, make_might_fail_sync};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lookup = make_might_fail(|id: u32| async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        match id {
            1 => Ok("alpha"),
            2 => Ok("beta"),
            _ => Err(format!("no entry for {id}")),
        }
    });

    for id in 1..=3 {
        match lookup.call(id).await.into_std() {
            Ok(name) => info!(id, name, "found"),
            Err(error) => warn!(id, %error, "missing"),
        }
    }

    let subtract = |(a, b): (u32, u32)| a.checked_sub(b).ok_or("underflow");
    let checked_sub = make_might_fail_sync(subtract);
    info!(ok = ?checked_sub.call((5, 3)).result(), "5 - 3");
    let underflow = checked_sub.call((3, 5));
    info!(err = ?underflow.error().map(|e| e.message()), "3 - 5");
}
