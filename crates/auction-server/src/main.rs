//! # Auction Server
//!
//! Entry point: loads configuration, sets up logging and runs the server.

use auction_config::ConfigLoader;
use auction_server::{app, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::load_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("Starting auction server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = app::run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
