//! Sellwise Dashboard
//!
//! Serves the advisor page and the analysis API.

use dotenvy::dotenv;
use sellwise::config::AdvisorConfig;
use sellwise::core::http::start_server;
use sellwise::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AdvisorConfig::from_env()?;
    let env = sellwise::config::get_environment();
    info!("Starting Sellwise Dashboard");
    info!(environment = %env, "Environment");

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down dashboard...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
