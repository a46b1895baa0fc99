//! Guild API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p guild-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use guild_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration first: the tracing preset depends on APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", AppError::from(e));
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting Guild API Server..."
    );

    if let Err(e) = guild_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
