//! Expand wildcard version templates and classify them against a target version.
//!
//! ```
//! use indexmap::IndexMap;
//! use version_analyzer::VersionAnalyzer;
//!
//! let mut templates = IndexMap::new();
//! templates.insert("a".to_string(), "1.2.*".to_string());
//! templates.insert("b".to_string(), "2.*.0".to_string());
//!
//! let analysis = VersionAnalyzer::new(&templates, "2.0.0")?.analyze()?;
//! assert_eq!(analysis.sorted(), ["1.2.0", "1.2.1", "2.0.0", "2.1.0"]);
//! assert_eq!(analysis.older(), ["1.2.0", "1.2.1"]);
//! # Ok::<(), version_analyzer::AnalyzerError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod report;

pub use analyzer::VersionAnalyzer;
pub use analyzer::engine::{Analysis, analyze};
pub use analyzer::error::AnalyzerError;
