//! morbyx-config — Application configuration.
//!
//! All fields are defaulted, so a missing config file yields a fully working
//! configuration. Loaded from `morbyx.toml` in the working directory, or the
//! path named by the `MORBYX_CONFIG` environment variable.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use morbyx_common::MorbyxError;
use serde::Deserialize;
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "morbyx.toml";
pub const CONFIG_ENV_VAR: &str = "MORBYX_CONFIG";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub dataset: DatasetConfig,
    pub server: ServerConfig,
    pub ranker: RankerConfig,
}

/// Where the source table lives and how much of it to ingest.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    /// Path to the delimited source file (header row required).
    pub path: PathBuf,
    /// Name of the disease-label column; every other column is a symptom flag.
    pub label_column: String,
    /// Maximum number of data rows ingested at startup.
    pub row_cap: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/dataset.csv"),
            label_column: "diseases".to_string(),
            row_cap: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Default ranking policy; individual API requests may override limit and
/// threshold within the handler's clamp.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RankerConfig {
    /// Maximum number of predictions returned per query.
    pub limit: usize,
    /// Scores must be strictly greater than this to be returned.
    pub min_score: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            min_score: 0.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: defaults apply. A present but
    /// unparseable file is a startup failure.
    pub fn load(path: &Path) -> Result<Self, MorbyxError> {
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&raw)
            .map_err(|e| MorbyxError::Config(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from `MORBYX_CONFIG` if set, otherwise from `morbyx.toml`.
    pub fn load_from_env() -> Result<Self, MorbyxError> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load(&path)
    }
}
