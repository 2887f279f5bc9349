//! Template pattern validation
//!
//! A template is a dot-separated list of components where every component is
//! either a run of ASCII digits or the single wildcard `*`.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use tracing::warn;

use crate::analyzer::error::AnalyzerError;

/// Component that expands to both `0` and `1`
pub const WILDCARD: &str = "*";

static PATTERN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+|\*)(\.(\d+|\*))*$").unwrap());

/// A named, validated version template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub pattern: String,
}

impl Template {
    /// Build a template, rejecting patterns with invalid syntax
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Result<Self, AnalyzerError> {
        let name = name.into();
        let pattern = pattern.into();
        if !is_valid_pattern(&pattern) {
            warn!("Rejecting template {}: {:?}", name, pattern);
            return Err(AnalyzerError::Configuration {
                key: name,
                value: pattern,
            });
        }
        Ok(Self { name, pattern })
    }

    /// Number of `*` components in the pattern
    pub fn wildcard_count(&self) -> usize {
        self.components().filter(|c| *c == WILDCARD).count()
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.pattern.split('.')
    }
}

/// Check a pattern string against the template grammar.
///
/// `\d` is Unicode-aware in `regex`, so digits are additionally required to be ASCII.
pub fn is_valid_pattern(pattern: &str) -> bool {
    pattern.is_ascii() && PATTERN_RE.is_match(pattern)
}

/// Validate every pattern of a name → pattern mapping.
///
/// Stops at the first invalid pattern in mapping order. On success the
/// templates are returned in the same order as the input.
pub fn validate_templates(
    templates: &IndexMap<String, String>,
) -> Result<Vec<Template>, AnalyzerError> {
    templates
        .iter()
        .map(|(name, pattern)| Template::new(name.as_str(), pattern.as_str()))
        .collect()
}
