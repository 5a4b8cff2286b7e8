//! Start-up log output.

use auction_config::AppConfig;
use tracing::info;

/// Logs where the server can be reached.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();

    info!("{}", separator);
    info!("{} v{} ({})", config.app.name, config.app.version, config.app.environment);
    info!("REST API:  http://{}/api/v1", addr);
    info!("Health:    http://{}/health", addr);
    info!("Provider:  {}", config.database.provider);
    info!("{}", separator);
}
