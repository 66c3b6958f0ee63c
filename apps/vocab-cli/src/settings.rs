//! Command-line settings read from arguments and the environment.

use std::path::PathBuf;

use thiserror::Error;
use vocab_core::ExtractionConfig;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("usage: vocab-extract <fragments.json>")]
    MissingInput,

    #[error("invalid {name}: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolved settings for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub config: ExtractionConfig,
    /// Fewer items than this is reported as a failed extraction.
    pub min_items: usize,
}

impl Settings {
    /// Build settings from process arguments and environment variables.
    ///
    /// Env vars:
    /// - VOCAB_CONFIG: Optional JSON file with `ExtractionConfig` overrides
    /// - VOCAB_MIN_ITEMS: Minimum usable entry count (default 5)
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_parts(
            std::env::args().skip(1),
            std::env::var("VOCAB_CONFIG").ok(),
            std::env::var("VOCAB_MIN_ITEMS").ok(),
        )
    }

    pub fn from_parts(
        mut args: impl Iterator<Item = String>,
        config_path: Option<String>,
        min_items: Option<String>,
    ) -> Result<Self, SettingsError> {
        let input = args.next().map(PathBuf::from).ok_or(SettingsError::MissingInput)?;

        let config = match config_path {
            Some(path) => load_config(PathBuf::from(path))?,
            None => ExtractionConfig::default(),
        };

        let min_items = match min_items {
            Some(value) => value.trim().parse().map_err(|_| SettingsError::InvalidVar {
                name: "VOCAB_MIN_ITEMS",
                value,
            })?,
            None => 5,
        };

        Ok(Self {
            input,
            config,
            min_items,
        })
    }
}

fn load_config(path: PathBuf) -> Result<ExtractionConfig, SettingsError> {
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) => return Err(SettingsError::ConfigRead { path, source }),
    };
    serde_json::from_str(&raw).map_err(|source| SettingsError::ConfigParse { path, source })
}
