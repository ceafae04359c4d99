//! Error types for request validation and preset resolution.

use thiserror::Error;

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised while resolving presets or validating a synthesis request.
///
/// Every variant is raised before any sample buffer is allocated.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The selector key is not present in the preset catalog.
    #[error("unknown preset: '{key}'")]
    UnknownPreset {
        /// The key that was looked up.
        key: String,
    },

    /// A request parameter is out of its valid domain.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The requested duration exceeds the active budget ceiling.
    #[error("duration {duration_seconds} s exceeds the maximum of {max_seconds} s")]
    DurationTooLarge {
        /// Requested duration in seconds.
        duration_seconds: f64,
        /// Ceiling in seconds.
        max_seconds: f64,
    },

    /// The preset catalog document is structurally invalid.
    #[error("invalid preset catalog: {message}")]
    InvalidCatalog {
        /// Error message.
        message: String,
    },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid catalog error.
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            message: message.into(),
        }
    }

    /// Creates an unknown preset error.
    pub fn unknown_preset(key: impl Into<String>) -> Self {
        Self::UnknownPreset { key: key.into() }
    }
}

/// Trait for errors that carry a stable code and category.
///
/// Implemented by every error type in the workspace so the CLI can report
/// failures uniformly.
///
/// # Example
///
/// ```
/// use beatgen_spec::error::{BackendError, SpecError};
///
/// let err = SpecError::unknown_preset("omega");
/// assert_eq!(err.code(), "SPEC_001");
/// assert_eq!(err.category(), "spec");
/// ```
pub trait BackendError: std::error::Error {
    /// Stable error code such as "SPEC_001" or "AUDIO_002".
    fn code(&self) -> &'static str;

    /// Human-readable message, by default the `Display` output.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category used for grouping ("spec", "audio").
    fn category(&self) -> &'static str;
}

impl BackendError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::UnknownPreset { .. } => "SPEC_001",
            SpecError::InvalidParameter { .. } => "SPEC_002",
            SpecError::DurationTooLarge { .. } => "SPEC_003",
            SpecError::InvalidCatalog { .. } => "SPEC_004",
            SpecError::Json(_) => "SPEC_005",
            SpecError::Io(_) => "SPEC_006",
        }
    }

    fn category(&self) -> &'static str {
        "spec"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = SpecError::invalid_param("carrier_hz", "must be positive");
        assert!(err.to_string().contains("carrier_hz"));
        assert!(err.to_string().contains("must be positive"));
        assert_eq!(err.code(), "SPEC_002");
    }

    #[test]
    fn test_duration_too_large_message() {
        let err = SpecError::DurationTooLarge {
            duration_seconds: 7201.0,
            max_seconds: 7200.0,
        };
        assert_eq!(
            err.to_string(),
            "duration 7201 s exceeds the maximum of 7200 s"
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            SpecError::unknown_preset("x"),
            SpecError::invalid_param("x", "y"),
            SpecError::DurationTooLarge {
                duration_seconds: 2.0,
                max_seconds: 1.0,
            },
            SpecError::invalid_catalog("x"),
            SpecError::Io(std::io::Error::other("x")),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
