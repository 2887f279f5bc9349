//! Version template analysis
//!
//! Expands wildcard version templates into concrete versions, orders them
//! numerically and finds the ones older than a target version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Pattern   │────▶│  Expander   │────▶│ Normalizer  │────▶│   Engine    │
//! │ (validate)  │     │ (0/1 for *) │     │ (pad width) │     │(sort, split)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`pattern`]: Template syntax validation
//! - [`expander`]: Wildcard expansion of templates
//! - [`normalizer`]: Fixed-width integer tuples for ordering
//! - [`engine`]: Sorting and partitioning against the target
//! - [`error`]: Error type shared by all stages

pub mod engine;
pub mod error;
pub mod expander;
pub mod normalizer;
pub mod pattern;

use std::fmt;

use indexmap::IndexMap;
use tracing::info;

use crate::config::AnalyzerOptions;
use engine::Analysis;
use error::AnalyzerError;
use pattern::Template;

/// Validated templates and their pooled expansion for one target version
#[derive(Debug, Clone)]
pub struct VersionAnalyzer {
    target: String,
    templates: Vec<Template>,
    variants: Vec<String>,
}

impl VersionAnalyzer {
    pub fn new(
        templates: &IndexMap<String, String>,
        target: impl Into<String>,
    ) -> Result<Self, AnalyzerError> {
        Self::with_options(templates, target, &AnalyzerOptions::default())
    }

    /// Validate and expand `templates`; nothing is kept if any template is invalid.
    pub fn with_options(
        templates: &IndexMap<String, String>,
        target: impl Into<String>,
        options: &AnalyzerOptions,
    ) -> Result<Self, AnalyzerError> {
        let target = target.into();
        let templates = pattern::validate_templates(templates)?;
        let variants = expander::expand_all(&templates, options.max_variants)?;

        info!(
            "Loaded {} templates, generated {} variants",
            templates.len(),
            variants.len()
        );

        Ok(Self {
            target,
            templates,
            variants,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Expanded versions of all templates, in template order
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn analyze(&self) -> Result<Analysis, AnalyzerError> {
        engine::analyze(&self.variants, &self.target)
    }
}

impl fmt::Display for VersionAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version analyzer:")?;
        writeln!(f, "  Target version: {}", self.target)?;
        writeln!(f, "  Templates loaded: {}", self.template_count())?;
        writeln!(f, "  Variants generated: {}", self.variants.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn new_expands_templates_in_configuration_order() {
        let analyzer =
            VersionAnalyzer::new(&templates(&[("a", "1.2.*"), ("b", "2.*.0")]), "2.0.0").unwrap();

        assert_eq!(analyzer.template_count(), 2);
        assert_eq!(analyzer.variants(), ["1.2.0", "1.2.1", "2.0.0", "2.1.0"]);
    }

    #[test]
    fn with_options_enforces_variant_limit() {
        let options = AnalyzerOptions { max_variants: 3 };

        let err =
            VersionAnalyzer::with_options(&templates(&[("a", "*.*")]), "1.0", &options).unwrap_err();

        assert_eq!(
            err,
            AnalyzerError::ExpansionLimit {
                key: "a".to_string(),
                limit: 3
            }
        );
    }

    #[test]
    fn analyze_handles_valid_pattern_with_oversized_component() {
        let analyzer =
            VersionAnalyzer::new(&templates(&[("a", "1.99999999999999999999")]), "2.0").unwrap();

        let analysis = analyzer.analyze().unwrap();

        assert_eq!(analysis.sorted(), ["1.99999999999999999999"]);
        assert_eq!(analysis.older(), ["1.99999999999999999999"]);
    }

    #[test]
    fn display_summarizes_configuration() {
        let analyzer = VersionAnalyzer::new(&templates(&[("a", "1.*.*")]), "1.2.3").unwrap();

        assert_eq!(
            analyzer.to_string(),
            "Version analyzer:\n  Target version: 1.2.3\n  Templates loaded: 1\n  Variants generated: 4\n"
        );
    }
}
