//! Error types for audio backend.

use beatgen_spec::{BackendError, SpecError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis, encoding, or decoding.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The request was rejected before synthesis.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// The WAV container could not be constructed.
    #[error("encoding failure: {message}")]
    EncodingFailure {
        /// Error message.
        message: String,
    },

    /// A WAV byte stream could not be parsed.
    #[error("decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an encoding failure.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::EncodingFailure {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Spec(inner) => inner.code(),
            AudioError::EncodingFailure { .. } => "AUDIO_001",
            AudioError::Decode { .. } => "AUDIO_002",
            AudioError::Io(_) => "AUDIO_003",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            AudioError::Spec(inner) => inner.category(),
            _ => "audio",
        }
    }
}
