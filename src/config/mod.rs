//! Configuration management for folio
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use folio::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Serving projects from: {}", config.content.projects_dir.display());
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `FOLIO__<section>__<key>`
//!
//! Examples:
//! - `FOLIO__SERVER__BIND_ADDR=127.0.0.1:3000`
//! - `FOLIO__CONTENT__PUBLIC_DIR=/srv/folio/public`
//! - `FOLIO__CAROUSEL__PRELOAD=false`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/folio.toml`.
//! This can be overridden using the `FOLIO_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use crate::humanize::ByteSize;
pub use models::{CarouselConfig, Config, ContentConfig, ServerConfig};
pub use validation::{ValidationError, parse_aspect_ratio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("folio.toml");

        let toml_content = r#"
[server]
bind_addr = "0.0.0.0:3000"

[content]
projects_dir = "content/projects"
documents_file = "content/documents.toml"
profile_file = "content/profile.toml"
public_dir = "public"
max_file_bytes = "2MB"

[carousel]
preload = true
aspect_ratio = "16 / 9"
sizes = "100vw"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.server.bind_addr.port(), 3000);
        assert_eq!(config.content.max_file_bytes.as_u64(), 2 * 1024 * 1024);
        assert_eq!(config.carousel.sizes, "100vw");
    }

    #[test]
    fn test_validation_rejects_bad_aspect_ratio() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("folio.toml");

        fs::write(&config_path, "[carousel]\naspect_ratio = \"square\"\n").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(ValidationError::InvalidAspectRatio { .. })
        ));
    }
}
