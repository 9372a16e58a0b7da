//! Dashboard configuration
//!
//! Read from an optional `config/dashboard.{toml,yaml,json}` file, then
//! overridden by `DASHBOARD_*` environment variables, e.g.
//! `DASHBOARD_SERVER__PORT=8080` or `DASHBOARD_DATASET__PATH=/srv/titanic.csv`.

use crate::rate_limit::RateLimitConfig;
use config::{Config, ConfigError, Environment, File};
use passenger_data::Port;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default configuration file, without extension
pub const DEFAULT_CONFIG_FILE: &str = "config/dashboard";

/// Manifest served when no path is configured, relative to the working directory
pub const DEFAULT_DATASET: &str = "data/titanic_sample.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7860,
        }
    }
}

impl ServerConfig {
    /// `host:port` bind address
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Passenger manifest CSV
    pub path: PathBuf,
    /// Port assumed for passengers with no embarkation record
    pub fill_port: Port,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET),
            fill_port: Port::Southampton,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Top-level dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load from the default file location and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from `path` (optional, extension selects the format) and the environment
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Self::load_sources(path, Some(Self::environment()))
    }

    /// `DASHBOARD_*` variables, `__` separating nested keys
    pub fn environment() -> Environment {
        Environment::with_prefix("DASHBOARD")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Layer an optional file under an optional environment source
    pub fn load_sources(path: &str, env: Option<Environment>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(File::with_name(path).required(false));
        if let Some(env) = env {
            builder = builder.add_source(env);
        }
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "127.0.0.1:7860");
        assert_eq!(config.dataset.path, PathBuf::from(DEFAULT_DATASET));
        assert_eq!(config.dataset.fill_port, Port::Southampton);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_sources("config/does-not-exist", None).unwrap();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.rate_limit, RateLimitConfig::default());
    }

    #[test]
    fn test_partial_toml_file() {
        let path = std::env::temp_dir().join(format!("dashboard-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[server]\nport = 9000\n\n[dataset]\npath = \"/srv/titanic.csv\"\nfill_port = \"Q\"\n\n[logging]\njson = true\n",
        )
        .unwrap();

        let config = AppConfig::load_sources(path.to_str().unwrap(), None).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.dataset.path, PathBuf::from("/srv/titanic.csv"));
        assert_eq!(config.dataset.fill_port, Port::Queenstown);
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = std::env::temp_dir().join(format!("dashboard-env-{}.toml", std::process::id()));
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let mut vars = config::Map::new();
        vars.insert("DASHBOARD_SERVER__PORT".to_string(), "8080".to_string());
        vars.insert("DASHBOARD_LOGGING__LEVEL".to_string(), "debug".to_string());
        let env = AppConfig::environment().source(Some(vars));

        let config = AppConfig::load_sources(path.to_str().unwrap(), Some(env)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
