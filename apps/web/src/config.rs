//! # Application Configuration
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Loading Order                          │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ESTOQUE_HOST, ESTOQUE_PORT, ESTOQUE_DB_PATH,                        │
//! │     ESTOQUE_DB_MAX_CONNECTIONS, ESTOQUE_BARCODE_DIR                     │
//! │                                                                         │
//! │  2. Config File                                                        │
//! │     $ESTOQUE_CONFIG, else ./estoque.toml if present                     │
//! │                                                                         │
//! │  3. Defaults (lowest priority)                                         │
//! │     0.0.0.0:5000, estoque.db, codigos/                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Config File
//! ```toml
//! # estoque.toml
//! [server]
//! host = "0.0.0.0"
//! port = 5000
//!
//! [database]
//! path = "estoque.db"
//! max_connections = 5
//!
//! [barcodes]
//! dir = "codigos"
//! height = 80
//! ```

use std::path::{Path, PathBuf};

use estoque_db::DbConfig;
use estoque_export::BarcodeRenderer;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ESTOQUE_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "estoque.toml";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// SQLite settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Database file. Created on first start.
    pub path: PathBuf,

    /// Pool size.
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: PathBuf::from("estoque.db"),
            max_connections: 5,
        }
    }
}

/// Barcode image settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeSettings {
    /// Output directory, also served under `/codigos`.
    pub dir: PathBuf,

    /// Image height in pixels.
    pub height: u32,
}

impl Default for BarcodeSettings {
    fn default() -> Self {
        BarcodeSettings {
            dir: PathBuf::from(estoque_export::barcode::DEFAULT_OUTPUT_DIR),
            height: estoque_export::barcode::DEFAULT_HEIGHT,
        }
    }
}

// =============================================================================
// AppConfig
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub barcodes: BarcodeSettings,
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// An explicit `$ESTOQUE_CONFIG` must exist. `./estoque.toml` is
    /// optional.
    pub fn load() -> ConfigResult<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

        let mut config = match explicit {
            Some(path) if !path.exists() => return Err(ConfigError::FileNotFound(path)),
            Some(path) => Self::from_file(&path)?,
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `ESTOQUE_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<()> {
        if let Some(host) = lookup("ESTOQUE_HOST") {
            debug!(host = %host, "Overriding host from environment");
            self.server.host = host;
        }

        if let Some(port) = lookup("ESTOQUE_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ESTOQUE_PORT".to_string()))?;
        }

        if let Some(path) = lookup("ESTOQUE_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database.path = PathBuf::from(path);
        }

        if let Some(max) = lookup("ESTOQUE_DB_MAX_CONNECTIONS") {
            self.database.max_connections = max.trim().parse().map_err(|_| {
                ConfigError::InvalidValue("ESTOQUE_DB_MAX_CONNECTIONS".to_string())
            })?;
        }

        if let Some(dir) = lookup("ESTOQUE_BARCODE_DIR") {
            self.barcodes.dir = PathBuf::from(dir);
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be greater than 0".into()));
        }

        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("database.path must not be empty".into()));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be greater than 0".into(),
            ));
        }

        if self.barcodes.height == 0 {
            return Err(ConfigError::Invalid(
                "barcodes.height must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database.path).max_connections(self.database.max_connections)
    }

    pub fn barcode_renderer(&self) -> BarcodeRenderer {
        BarcodeRenderer::new(&self.barcodes.dir).with_height(self.barcodes.height)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.database.path, PathBuf::from("estoque.db"));
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.barcodes.dir, PathBuf::from("codigos"));
        assert_eq!(config.barcodes.height, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 8080

            [barcodes]
            dir = "/var/lib/estoque/codigos"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database, DatabaseSettings::default());
        assert_eq!(config.barcodes.dir, PathBuf::from("/var/lib/estoque/codigos"));
        assert_eq!(config.barcodes.height, 80);
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml("[server\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = AppConfig::from_toml("[server]\nport = 8080\n").unwrap();
        config
            .apply_overrides(env(&[
                ("ESTOQUE_HOST", "127.0.0.1"),
                ("ESTOQUE_PORT", "9000"),
                ("ESTOQUE_DB_PATH", "/tmp/estoque.db"),
                ("ESTOQUE_DB_MAX_CONNECTIONS", "2"),
                ("ESTOQUE_BARCODE_DIR", "/tmp/codigos"),
            ]))
            .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.database.path, PathBuf::from("/tmp/estoque.db"));
        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.barcodes.dir, PathBuf::from("/tmp/codigos"));
    }

    #[test]
    fn test_unparsable_env_port() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(env(&[("ESTOQUE_PORT", "cinco mil")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "ESTOQUE_PORT"));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.barcodes.height = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.database.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estoque.toml");
        std::fs::write(&path, "[database]\npath = \"loja.db\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.database.path, PathBuf::from("loja.db"));
        assert_eq!(config.db_config().max_connections, 5);
    }
}
