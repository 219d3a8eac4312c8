//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use crate::domains::preferences::Theme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Where and how user preferences are kept.
    pub preferences: PreferencesConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the preferences domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// JSON file holding favorites, recents and theme.
    /// If None, preferences live in memory and are lost on exit.
    pub storage_path: Option<PathBuf>,

    /// Theme used when none has been stored yet.
    pub default_theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "toolpanda".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            preferences: PreferencesConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(path) = std::env::var("MCP_PREFERENCES_PATH") {
            let path = PathBuf::from(path);
            info!("Preferences will be stored in {}", path.display());
            config.preferences.storage_path = Some(path);
        } else {
            warn!("MCP_PREFERENCES_PATH not set - preferences are kept in memory only");
        }

        if let Ok(theme) = std::env::var("MCP_DEFAULT_THEME") {
            match theme.parse() {
                Ok(theme) => config.preferences.default_theme = theme,
                Err(e) => warn!("Ignoring MCP_DEFAULT_THEME: {}", e),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "toolpanda");
        assert_eq!(config.logging.level, "info");
        assert!(config.preferences.storage_path.is_none());
        assert_eq!(config.preferences.default_theme, Theme::Light);
    }

    #[test]
    fn test_preferences_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PREFERENCES_PATH", "/tmp/toolpanda/prefs.json");
            std::env::set_var("MCP_DEFAULT_THEME", "dark");
        }
        let config = Config::from_env();
        assert_eq!(
            config.preferences.storage_path,
            Some(PathBuf::from("/tmp/toolpanda/prefs.json"))
        );
        assert_eq!(config.preferences.default_theme, Theme::Dark);
        unsafe {
            std::env::remove_var("MCP_PREFERENCES_PATH");
            std::env::remove_var("MCP_DEFAULT_THEME");
        }
    }

    #[test]
    fn test_invalid_theme_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_PREFERENCES_PATH");
            std::env::set_var("MCP_DEFAULT_THEME", "sepia");
        }
        let config = Config::from_env();
        assert!(config.preferences.storage_path.is_none());
        assert_eq!(config.preferences.default_theme, Theme::Light);
        unsafe {
            std::env::remove_var("MCP_DEFAULT_THEME");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "panda-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "panda-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
