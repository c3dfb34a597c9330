//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::path::PathBuf;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default font directory, relative to the working directory
pub const DEFAULT_FONTS_DIR: &str = "fonts";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Font storage configuration
    pub storage: StorageConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
    /// Upper bound on request bodies; `None` means unlimited
    pub max_upload_bytes: Option<usize>,
}

/// Font storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the font files
    pub fonts_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_PORT,
                host: "0.0.0.0".to_string(),
                max_upload_bytes: None,
            },
            storage: StorageConfig {
                fonts_dir: PathBuf::from(DEFAULT_FONTS_DIR),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
                host: env::var("HOST").unwrap_or(defaults.server.host),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .ok()
                    .and_then(|m| m.parse().ok()),
            },
            storage: StorageConfig {
                fonts_dir: env::var_os("FONTS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.fonts_dir),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["PORT", "HOST", "FONTS_DIR", "MAX_UPLOAD_BYTES"] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.storage.fonts_dir, PathBuf::from("fonts"));
        assert!(config.server.max_upload_bytes.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("PORT", "8088");
        env::set_var("HOST", "127.0.0.1");
        env::set_var("FONTS_DIR", "/srv/fonts");
        env::set_var("MAX_UPLOAD_BYTES", "1048576");

        let config = Config::from_env();
        assert_eq!(config.server_addr(), "127.0.0.1:8088");
        assert_eq!(config.storage.fonts_dir, PathBuf::from("/srv/fonts"));
        assert_eq!(config.server.max_upload_bytes, Some(1_048_576));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port_falls_back() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        assert_eq!(Config::from_env().server.port, DEFAULT_PORT);
        clear_env();
    }
}
