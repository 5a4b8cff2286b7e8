//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use auction_core::AuctionError;
use config::{Config, ConfigError, Environment, File, Map};
use std::path::Path;
use tracing::{debug, info};

/// Prefix for environment variable overrides, e.g. `AUCTION__DATABASE__URL`.
pub const ENV_PREFIX: &str = "AUCTION";

/// Variable naming the active environment file.
pub const ENVIRONMENT_VAR: &str = "AUCTION_ENVIRONMENT";

/// Loads [`AppConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration found in `config_dir`.
    ///
    /// Sources are merged in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Uncommitted local overrides
    /// 4. Environment variables with `AUCTION__` prefix
    ///
    /// Missing files are skipped; built-in defaults fill any gaps.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::Configuration`] if a source cannot be parsed
    /// or the merged configuration fails validation.
    pub fn load(config_dir: &str) -> Result<AppConfig, AuctionError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());

        load_layers(config_dir, &environment, None)
    }

    /// Loads configuration from the default location (`./config`).
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::load`].
    pub fn load_default() -> Result<AppConfig, AuctionError> {
        Self::load("./config")
    }
}

/// Merges file layers and environment overrides, then validates.
///
/// `env_source` replaces the process environment when given.
fn load_layers(
    config_dir: &str,
    environment: &str,
    env_source: Option<Map<String, String>>,
) -> Result<AppConfig, AuctionError> {
    info!("Loading configuration for environment: {}", environment);

    let mut builder = Config::builder();

    for name in ["default", environment, "local"] {
        let path = format!("{}/{}.toml", config_dir, name);
        if Path::new(&path).exists() {
            debug!("Loading config layer from: {}", path);
            builder = builder.add_source(File::with_name(&path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(env_source),
    );

    let app_config: AppConfig = builder
        .build()
        .and_then(|config| config.try_deserialize::<AppConfig>())
        .map_err(config_error_to_auction_error)?;

    ConfigValidator::validate(&app_config)
        .map_err(|errors| AuctionError::Configuration(format_validation_errors(&errors)))?;

    Ok(app_config)
}

fn config_error_to_auction_error(err: ConfigError) -> AuctionError {
    AuctionError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn load(dir: &TempDir, environment: &str, env: &[(&str, &str)]) -> Result<AppConfig, AuctionError> {
        let source: Map<String, String> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        load_layers(dir.path().to_str().unwrap(), environment, Some(source))
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let config = load(&dir, "development", &[]).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.provider, "mysql");
    }

    #[test]
    fn test_environment_file_overrides_default() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            "[server]\nport = 8000\n\n[database]\nurl = \"mysql://a:b@default/auction\"\n",
        );
        write(&dir, "staging.toml", "[server]\nport = 8100\n");

        let config = load(&dir, "staging", &[]).unwrap();
        assert_eq!(config.server.port, 8100);
        assert_eq!(config.database.url, "mysql://a:b@default/auction");

        let config = load(&dir, "development", &[]).unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_local_file_overrides_environment_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "development.toml", "[logging]\nlevel = \"warn\"\n");
        write(&dir, "local.toml", "[logging]\nlevel = \"debug\"\njson = true\n");

        let config = load(&dir, "development", &[]).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_environment_variables_override_files() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            "[database]\nurl = \"mysql://a:b@file/auction\"\nprovider = \"mysql\"\n",
        );

        let config = load(
            &dir,
            "development",
            &[
                ("AUCTION__DATABASE__URL", "mysql://a:b@env/auction"),
                ("AUCTION__DATABASE__PROVIDER", "sqlite"),
                ("AUCTION__SERVER__PORT", "9001"),
                ("AUCTION__RULES__DESCRIPTION_SIMILARITY_THRESHOLD", "0.5"),
            ],
        )
        .unwrap();

        assert_eq!(config.database.url, "mysql://a:b@env/auction");
        assert_eq!(config.database.provider, "sqlite");
        assert_eq!(config.server.port, 9001);
        assert!((config.rules.description_similarity_threshold - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            "[database]\nmin_connections = 20\nmax_connections = 5\n",
        );

        let err = load(&dir, "development", &[]).unwrap_err();
        assert!(matches!(err, AuctionError::Configuration(_)));
        assert!(err.to_string().contains("Invalid pool size"));
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server\nport = ");

        assert!(matches!(
            load(&dir, "development", &[]),
            Err(AuctionError::Configuration(_))
        ));
    }

    #[test]
    fn test_load_returns_validated_config() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[app]\nname = \"auction-test\"\n");

        let config = ConfigLoader::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.app.name, "auction-test");
    }
}
