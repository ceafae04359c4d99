//! JSON output types for machine-readable CLI output.
//!
//! Every command that takes `--json` prints one [`CommandOutput`] envelope on
//! stdout. Library errors keep their own codes (`SPEC_xxx`, `AUDIO_xxx`);
//! failures that only exist at the CLI level use the codes below.

use std::process::ExitCode;

use anyhow::Context;
use beatgen_backend_audio::AudioError;
use beatgen_spec::{BackendError, FrequencySpec, SpecError};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Unknown budget profile
    pub const UNKNOWN_BUDGET: &str = "CLI_003";
    /// No preset given and the catalog has no default
    pub const MISSING_PRESET: &str = "CLI_004";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// The requested preset was missing and a fallback was used
    pub const PRESET_FALLBACK: &str = "CLI_W001";
}

/// Exit code for a request or catalog problem.
pub const EXIT_REQUEST_ERROR: u8 = 1;

/// Exit code for a synthesis, encoding, or I/O problem.
pub const EXIT_GENERATION_ERROR: u8 = 2;

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "SPEC_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File path involved (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Envelope printed by every `--json` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Non-fatal warnings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<JsonWarning>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}

/// A command failure with its stable code and process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Stable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// File path involved (if applicable).
    pub file: Option<String>,
    /// Process exit code.
    pub exit: u8,
}

impl Failure {
    /// Creates a request-level failure (exit code 1).
    pub fn request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
            exit: EXIT_REQUEST_ERROR,
        }
    }

    /// Creates a generation-level failure (exit code 2).
    pub fn generation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            exit: EXIT_GENERATION_ERROR,
            ..Self::request(code, message)
        }
    }

    /// Sets the file path for this failure.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Process exit code.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit)
    }

    /// JSON form of this failure.
    pub fn to_json(&self) -> JsonError {
        let error = JsonError::new(&self.code, &self.message);
        match &self.file {
            Some(file) => error.with_file(file),
            None => error,
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{} ({})", self.message, file),
            None => write!(f, "{}", self.message),
        }
    }
}

impl From<SpecError> for Failure {
    fn from(err: SpecError) -> Self {
        Self::request(err.code(), err.to_string())
    }
}

impl From<AudioError> for Failure {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::Spec(inner) => inner.into(),
            other => Self::generation(other.code(), other.to_string()),
        }
    }
}

/// Result details for `generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Key the caller asked for
    pub requested_key: String,
    /// Catalog key that produced the spec
    pub resolved_key: String,
    /// True when the requested key was missing and a fallback was used
    pub fell_back: bool,
    /// Resolved frequency spec
    pub spec: FrequencySpec,
    /// Left channel frequency in Hz
    pub left_hz: f64,
    /// Right channel frequency in Hz
    pub right_hz: f64,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Stereo frames written
    pub num_frames: usize,
    /// Output file path
    pub output: String,
    /// Output file size in bytes
    pub size_bytes: u64,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// BLAKE3 hash of the canonical request
    pub request_hash: String,
    /// Budget profile used
    pub budget: String,
    /// Catalog source ("built-in" or a file path)
    pub catalog: String,
    /// Whether the block-wise writer was used
    pub streamed: bool,
}

/// One row of `presets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetRecord {
    /// Catalog key
    pub key: String,
    /// Resolved spec
    pub spec: FrequencySpec,
    /// Alias target, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Descriptive range low bound in Hz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_low_hz: Option<f64>,
    /// Descriptive range high bound in Hz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_high_hz: Option<f64>,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Suggested output filename
    pub filename: String,
}

/// Result details for `presets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetsResult {
    /// Catalog source ("built-in" or a file path)
    pub catalog: String,
    /// Default key, if declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_key: Option<String>,
    /// Presets in key order
    pub presets: Vec<PresetRecord>,
}

/// Prints an envelope as pretty JSON on stdout.
pub fn print_json<T: Serialize>(output: &CommandOutput<T>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(output).context("failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}
