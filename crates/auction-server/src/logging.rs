//! Tracing subscriber set-up.

use auction_config::LoggingConfig;
use auction_core::{AuctionError, AuctionResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter: `RUST_LOG` wins, otherwise the configured level for
/// the auction crates with HTTP tracing at the same level.
#[must_use]
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.to_lowercase();
        EnvFilter::new(format!(
            "warn,auction_server={level},auction_rest={level},auction_service={level},\
             auction_repository={level},auction_config={level},http={level},tower_http={level}"
        ))
    })
}

/// Installs the global subscriber, pretty or JSON.
///
/// # Errors
///
/// Returns [`AuctionError::Configuration`] if a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> AuctionResult<()> {
    let registry = tracing_subscriber::registry().with(build_filter(&config.level));

    let result = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| AuctionError::Configuration(format!("Failed to initialize logging: {}", e)))
}
