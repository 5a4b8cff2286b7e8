//! Configuration validation.
//!
//! Checks every section after loading so a bad value fails start-up
//! instead of surfacing on the first request.

use crate::AppConfig;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Similarity threshold must lie in (0, 1].
    InvalidSimilarityThreshold { value: f64 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) cannot be greater than max ({})",
                    min, max
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(
                    f,
                    "Pool size {} exceeds maximum allowed ({})",
                    value, maximum
                )
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "Timeout '{}' must be positive, got {}", name, value)
            }
            Self::InvalidSimilarityThreshold { value } => {
                write!(
                    f,
                    "Invalid description similarity threshold: {} (must be in (0.0, 1.0])",
                    value
                )
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_database(&config.database, &mut errors);
        Self::validate_rules(&config.rules, &mut errors);
        Self::validate_logging(&config.logging, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &crate::ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.port,
            });
        }

        if config.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_database(config: &crate::DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.url.trim().is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if let Err(e) = Url::parse(&config.url) {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: e.to_string(),
            });
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
                value: 0,
            });
        }
        if config.idle_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.idle_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_rules(config: &crate::RulesConfig, errors: &mut Vec<ConfigValidationError>) {
        let value = config.description_similarity_threshold;
        if !(value > 0.0 && value <= 1.0) {
            errors.push(ConfigValidationError::InvalidSimilarityThreshold { value });
        }
    }

    fn validate_logging(config: &crate::LoggingConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.level.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidPort { name, value: 0 } if name == "server.port"
        )));
    }

    #[test]
    fn test_invalid_pool_size() {
        let mut config = AppConfig::default();
        config.database.min_connections = 50;
        config.database.max_connections = 10;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.contains(&ConfigValidationError::InvalidPoolSize { min: 50, max: 10 }));
    }

    #[test]
    fn test_pool_size_too_large() {
        let mut config = AppConfig::default();
        config.database.max_connections = 5000;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigValidationError::PoolSizeTooLarge { value: 5000, .. })));
    }

    #[test]
    fn test_empty_database_url() {
        let mut config = AppConfig::default();
        config.database.url = "  ".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "database"
        )));
    }

    #[test]
    fn test_malformed_database_url() {
        let mut config = AppConfig::default();
        config.database.url = "not a url".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_similarity_threshold_bounds() {
        let mut config = AppConfig::default();

        config.rules.description_similarity_threshold = 1.0;
        assert!(ConfigValidator::validate(&config).is_ok());

        for value in [0.0, -0.5, 1.01, f64::NAN] {
            config.rules.description_similarity_threshold = value;
            let errors = ConfigValidator::validate(&config).unwrap_err();
            assert!(errors
                .iter()
                .any(|e| matches!(e, ConfigValidationError::InvalidSimilarityThreshold { .. })));
        }
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.contains(&ConfigValidationError::InvalidLogLevel {
            value: "verbose".to_string()
        }));

        config.logging.level = "DEBUG".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.database.connect_timeout_secs = 0;
        config.logging.level = "loud".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_format_validation_errors() {
        let errors = vec![
            ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: 0,
            },
            ConfigValidationError::InvalidSimilarityThreshold { value: 2.0 },
        ];

        let formatted = format_validation_errors(&errors);
        assert!(formatted.starts_with("Configuration validation failed:"));
        assert!(formatted.contains("1. Invalid port for server.port"));
        assert!(formatted.contains("2. Invalid description similarity threshold: 2"));
    }
}
