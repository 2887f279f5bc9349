use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::analyzer::error::AnalyzerError;

// =============================================================================
// Defaults
// =============================================================================

/// Target version used when none is given on the command line
pub const DEFAULT_TARGET_VERSION: &str = "1.2.3";

/// Template file used when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Upper bound on the pooled number of expanded versions.
///
/// Each wildcard doubles a template's expansion, so a handful of templates
/// with many wildcards would otherwise grow without bound.
pub const DEFAULT_MAX_VARIANTS: usize = 4096;

/// Tunables for one analysis
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerOptions {
    pub max_variants: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            max_variants: DEFAULT_MAX_VARIANTS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(serde_json::Error),

    #[error("Template file must contain a JSON object of name -> pattern")]
    NotAnObject,

    #[error(transparent)]
    Template(#[from] AnalyzerError),
}

/// Read a template file from disk. See [`parse_templates`].
pub fn load_templates(path: &Path) -> Result<IndexMap<String, String>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_templates(&content)
}

/// Decode a JSON object of template name → pattern, keeping file order.
///
/// Values must be JSON strings; pattern syntax itself is checked later by
/// the analyzer.
pub fn parse_templates(content: &str) -> Result<IndexMap<String, String>, ConfigError> {
    let raw: IndexMap<String, Value> = serde_json::from_str(content).map_err(|e| {
        if e.is_data() {
            ConfigError::NotAnObject
        } else {
            ConfigError::Json(e)
        }
    })?;
    raw.into_iter()
        .map(|(key, value)| match value {
            Value::String(pattern) => Ok((key, pattern)),
            other => Err(AnalyzerError::Configuration {
                key,
                value: other.to_string(),
            }
            .into()),
        })
        .collect()
}
