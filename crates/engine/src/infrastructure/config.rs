//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// Where cargo records are kept
    pub store: StoreConfig,
    /// CORS allowed origins (comma-separated, or "*" for any). No CORS layer when unset.
    pub cors_allowed_origins: Option<String>,
}

/// Cargo storage backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Memory,
    Sqlite { path: String },
}

/// Backend names accepted by `CARGO_STORE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreKind {
    Memory,
    Sqlite,
}

impl FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "sqlite" => Ok(StoreKind::Sqlite),
            other => anyhow::bail!("CARGO_STORE must be 'memory' or 'sqlite', got '{}'", other),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store = match lookup("CARGO_STORE")
            .unwrap_or_else(|| "memory".to_string())
            .parse::<StoreKind>()?
        {
            StoreKind::Memory => StoreConfig::Memory,
            StoreKind::Sqlite => StoreConfig::Sqlite {
                path: lookup("CARGO_SQLITE_PATH").unwrap_or_else(|| "cargo.db".to_string()),
            },
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: lookup("SERVER_PORT")
                .or_else(|| lookup("PORT"))
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            store,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.store, StoreConfig::Memory);
        assert_eq!(config.cors_allowed_origins, None);
    }

    #[test]
    fn test_sqlite_store_with_path() {
        let config = config_from(&[
            ("CARGO_STORE", "SQLite"),
            ("CARGO_SQLITE_PATH", "/var/lib/cargo.db"),
        ])
        .unwrap();
        assert_eq!(
            config.store,
            StoreConfig::Sqlite {
                path: "/var/lib/cargo.db".to_string()
            }
        );
    }

    #[test]
    fn test_port_fallback_and_validation() {
        let config = config_from(&[("PORT", "9000")]).unwrap();
        assert_eq!(config.server_port, 9000);

        assert!(config_from(&[("SERVER_PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn test_unknown_store_rejected() {
        assert!(config_from(&[("CARGO_STORE", "postgres")]).is_err());
    }

    #[test]
    fn test_blank_cors_is_none() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "  ")]).unwrap();
        assert_eq!(config.cors_allowed_origins, None);
    }
}
