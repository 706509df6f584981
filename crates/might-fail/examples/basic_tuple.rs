//! Error-first tuple surface.
//!
//! Run with: cargo run --example basic_tuple

use might_fail::tuple::{might_fail, might_fail_sync};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

async fn read_config(path: &str) -> Result<String, std::io::Error> {
    tokio::fs::read_to_string(path).await
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let read = read_config("/definitely/missing.toml");
    let (error, contents) = might_fail(read).await.into_tuple();
    if let Some(error) = error {
        warn!(%error, "could not read config");
    }
    assert!(contents.is_none());

    let parse = || "8080".parse::<u16>().map_err(|e| e.to_string());
    let (error, port) = might_fail_sync(parse).into_tuple();
    assert!(error.is_none());
    info!(port = ?port, "parsed port");
}
