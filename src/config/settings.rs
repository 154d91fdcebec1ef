//! Configuration settings structures for bazaar-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "bazaar-rs".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database_name() -> String {
    "ecommerce".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// MongoDB connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    #[serde(default = "default_database_uri")]
    pub uri: String,

    /// Database name holding the collections
    #[serde(default = "default_database_name")]
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: default_database_uri(),
            database: default_database_name(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level or filter directives, e.g. "info" or "info,bazaar_rs=debug"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,

    /// Whether to use colored output (ignored in JSON mode)
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            colored: default_true(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Complete application settings loaded from configuration sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// MongoDB settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logger settings
    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validates the loaded settings
    ///
    /// # Errors
    /// Returns a `ConfigError::ValidationError` naming the offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application.name.is_empty() {
            return Err(ConfigError::validation(
                "application.name",
                "Application name cannot be empty",
            ));
        }

        if self.server.host.is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Server host cannot be empty",
            ));
        }

        if self.database.uri.is_empty() {
            return Err(ConfigError::validation(
                "database.uri",
                "MongoDB connection string cannot be empty",
            ));
        }

        if self.database.database.is_empty() {
            return Err(ConfigError::validation(
                "database.database",
                "Database name cannot be empty",
            ));
        }

        if self.logger.level.is_empty() {
            return Err(ConfigError::validation(
                "logger.level",
                "Log level cannot be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.application.name, "bazaar-rs");
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database.uri, "mongodb://localhost:27017");
        assert_eq!(settings.database.database, "ecommerce");
        assert_eq!(settings.logger.level, "info");
        assert!(!settings.logger.json);
        assert!(settings.logger.colored);
    }

    #[test]
    fn test_settings_from_empty_toml_uses_defaults() {
        let settings: Settings = toml::from_str("").expect("Should parse empty config");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_partial_toml_fills_the_rest() {
        let settings: Settings = toml::from_str(
            r#"
[server]
port = 8080

[database]
database = "ecommerce_test"
"#,
        )
        .expect("Should parse partial config");

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.database.database, "ecommerce_test");
        assert_eq!(settings.database.uri, "mongodb://localhost:27017");
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_uri() {
        let mut settings = Settings::default();
        settings.database.uri = String::new();

        let error = settings.validate().unwrap_err();
        assert!(error.to_string().contains("database.uri"));
    }

    #[test]
    fn test_validate_rejects_empty_app_name() {
        let mut settings = Settings::default();
        settings.application.name = String::new();

        assert!(settings.validate().is_err());
    }
}
