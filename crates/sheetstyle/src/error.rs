//! Error types for loading templates, palettes and host configuration.
//!
//! Resolution itself never fails: unknown template names are reported through
//! a [`DiagnosticSink`](crate::DiagnosticSink) and skipped. [`StyleSpecError`]
//! only comes out of the parsing and validation entry points.

/// Errors raised while loading style data from YAML/JSON or validating it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleSpecError {
    /// YAML parse or shape error.
    #[error("failed to parse YAML: {0}")]
    Yaml(String),

    /// JSON parse or shape error.
    #[error("failed to parse JSON: {0}")]
    Json(String),

    /// A palette color is not a 6-hex-digit code.
    #[error("invalid color '{value}' for '{name}' (expected 6 hex digits)")]
    InvalidColor { name: String, value: String },

    /// A template definition could not be understood.
    #[error("invalid template '{name}': {message}")]
    InvalidTemplate { name: String, message: String },
}

impl StyleSpecError {
    /// Create an invalid template error.
    pub fn template(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for StyleSpecError {
    fn from(err: serde_yaml::Error) -> Self {
        StyleSpecError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for StyleSpecError {
    fn from(err: serde_json::Error) -> Self {
        StyleSpecError::Json(err.to_string())
    }
}
