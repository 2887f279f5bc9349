use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// A configured template does not match `(\d+|\*)(\.(\d+|\*))*`
    #[error("Invalid template {key}: {value}")]
    Configuration { key: String, value: String },

    /// A version component is not a non-negative integer
    #[error("Malformed version '{version}': component '{component}' is not a non-negative integer")]
    MalformedVersion { version: String, component: String },

    /// Expanding the templates would produce more variants than allowed
    #[error("Template {key} exceeds the expansion limit of {limit} variants")]
    ExpansionLimit { key: String, limit: usize },
}
