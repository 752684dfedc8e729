use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use qualitab_ingest::LoadOptions;

/// Errors reading the optional config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// On-disk TOML config with an `[ingest]` section for loader settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub ingest: IngestSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngestSection {
    pub delimiter: Option<String>,
    pub missing_tokens: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Apply file values onto the defaults; CLI flags override afterwards.
    pub fn apply(&self, options: &mut LoadOptions) -> Result<(), ConfigError> {
        if let Some(delimiter) = &self.ingest.delimiter {
            let bytes = delimiter.as_bytes();
            if bytes.len() != 1 {
                return Err(ConfigError::Invalid(format!(
                    "delimiter '{delimiter}' must be a single byte"
                )));
            }
            options.delimiter = bytes[0];
        }
        if let Some(tokens) = &self.ingest.missing_tokens {
            options.missing_tokens = tokens.clone();
        }
        Ok(())
    }
}
