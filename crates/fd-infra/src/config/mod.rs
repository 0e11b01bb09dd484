//! Console configuration.
//!
//! Layered: compiled-in defaults, then an optional TOML file, then
//! `FREIGHTDESK_*` environment overrides (double underscore as the section
//! separator, e.g. `FREIGHTDESK_BACKEND__BASE_URL`).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config load failed: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    pub backend: BackendConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the logistics REST backend
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    /// Rows per page for shipment listings
    pub page_size: u32,
}

impl ConsoleConfig {
    /// Default config file location under the user config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("freightdesk").join("config.toml"))
    }

    /// Load with the full layering. An explicit `path` must exist; the
    /// default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("backend.base_url", "http://localhost:8080")?
            .set_default("backend.timeout_secs", 30i64)?
            .set_default("listing.page_size", 20i64)?;

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path));
            }
            None => {
                if let Some(default) = Self::default_path() {
                    builder = builder.add_source(config::File::from(default).required(false));
                }
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("FREIGHTDESK")
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }
}
