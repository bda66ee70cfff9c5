// ============================================================
// IMPORT CONFIGURATION
// ============================================================
// Defaults, optional TOML file, then TABLEPORT_* environment variables

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{ImportError, Result};

pub const ENV_PREFIX: &str = "TABLEPORT_";

/// Configuration for table import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Field delimiters considered when sniffing CSV data (default: , ; tab |)
    pub delimiter_candidates: Vec<char>,

    /// Number of leading lines sampled for delimiter detection (default: 10)
    pub delimiter_sample_lines: usize,

    /// Charsets tried, in order, when a text buffer has no byte-order mark
    pub charset_candidates: Vec<String>,

    /// Sheet read from XLS and XLSX workbooks (default: 0, the first sheet)
    pub sheet_index: usize,

    /// Host switch for HTML import, on top of the compiled-in support
    pub markup_enabled: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter_candidates: vec![',', ';', '\t', '|'],
            delimiter_sample_lines: 10,
            charset_candidates: vec![
                "ASCII".to_string(),
                "UTF-8".to_string(),
                "ISO-8859-1".to_string(),
            ],
            sheet_index: 0,
            markup_enabled: true,
        }
    }
}

impl ImportConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer an optional TOML file and the environment over the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(ImportConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }

        let config: ImportConfig = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ImportError::Config(e.to_string()))?;

        config.validate()?;
        tracing::debug!(?config, "Loaded import configuration");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.delimiter_candidates.is_empty() {
            return Err(ImportError::Config(
                "delimiter_candidates must not be empty".to_string(),
            ));
        }
        if let Some(c) = self.delimiter_candidates.iter().find(|c| !c.is_ascii()) {
            return Err(ImportError::Config(format!(
                "delimiter {:?} is not an ASCII character",
                c
            )));
        }
        if self.delimiter_sample_lines == 0 {
            return Err(ImportError::Config(
                "delimiter_sample_lines must be > 0".to_string(),
            ));
        }
        if self.charset_candidates.is_empty() {
            return Err(ImportError::Config(
                "charset_candidates must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Delimiter candidates as bytes, for the CSV reader
    pub fn delimiter_bytes(&self) -> Vec<u8> {
        self.delimiter_candidates
            .iter()
            .filter(|c| c.is_ascii())
            .map(|&c| c as u8)
            .collect()
    }
}
