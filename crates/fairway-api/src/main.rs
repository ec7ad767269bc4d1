//! Fairway API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p fairway-api
//! ```
//!
//! Configuration is loaded from environment variables (with `.env` support).

use fairway_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Fairway API server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    fairway_api::run(config).await?;

    Ok(())
}
