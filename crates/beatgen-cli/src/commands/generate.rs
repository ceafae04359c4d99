//! Generate command implementation
//!
//! Resolves a preset, synthesizes the session, and writes the WAV file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use beatgen_backend_audio::{generate_with_budget, write_wav_streaming};
use beatgen_spec::hash::request_hash;
use beatgen_spec::{
    suggested_filename, validate_request_with_budget, BudgetProfile, FallbackPolicy,
    SynthesisRequest, DEFAULT_CARRIER_HZ, DEFAULT_SAMPLE_RATE,
};
use colored::Colorize;

use super::json_output::{
    error_codes, print_json, warning_codes, CommandOutput, Failure, GenerateResult, JsonWarning,
};
use crate::input::{duration_seconds, load_catalog};

/// Options for one `generate` invocation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Preset key; the catalog default when absent.
    pub preset: Option<String>,
    /// Duration in minutes.
    pub minutes: Option<f64>,
    /// Duration in seconds; overrides `minutes`.
    pub seconds: Option<f64>,
    /// Carrier frequency in Hz.
    pub carrier_hz: Option<f64>,
    /// Sample rate in Hz.
    pub sample_rate: Option<u32>,
    /// Catalog JSON file.
    pub catalog: Option<String>,
    /// Key to use when the preset is not in the catalog.
    pub fallback: Option<String>,
    /// Budget profile name.
    pub budget: Option<String>,
    /// Output path; derived from the preset key when absent.
    pub output: Option<String>,
    /// Render in blocks straight to the file.
    pub stream: bool,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 request or catalog error, 2 generation error
pub fn run(options: &GenerateOptions, json_output: bool) -> Result<ExitCode> {
    let outcome = execute(options);

    if json_output {
        let (output, code) = match outcome {
            Ok((result, warnings)) => (CommandOutput::success(result, warnings), ExitCode::SUCCESS),
            Err(failure) => (CommandOutput::failure(vec![failure.to_json()]), failure.exit_code()),
        };
        print_json(&output)?;
        return Ok(code);
    }

    match outcome {
        Ok((result, warnings)) => {
            print_human(&result, &warnings);
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("{} [{}] {}", "error:".red().bold(), failure.code, failure);
            Ok(failure.exit_code())
        }
    }
}

/// Resolves, validates, synthesizes, and writes one session.
pub fn execute(
    options: &GenerateOptions,
) -> std::result::Result<(GenerateResult, Vec<JsonWarning>), Failure> {
    let budget_name = options.budget.as_deref().unwrap_or("default");
    let budget = BudgetProfile::by_name(budget_name).ok_or_else(|| {
        Failure::request(
            error_codes::UNKNOWN_BUDGET,
            format!(
                "unknown budget profile: {} (expected one of {})",
                budget_name,
                BudgetProfile::NAMES.join(", ")
            ),
        )
    })?;

    let loaded = load_catalog(options.catalog.as_deref())?;
    let catalog = &loaded.catalog;

    let requested_key = match options.preset.as_deref().or(catalog.default_key()) {
        Some(key) => key.to_string(),
        None => {
            return Err(Failure::request(
                error_codes::MISSING_PRESET,
                "no --preset given and the catalog declares no default",
            ))
        }
    };
    let policy = match &options.fallback {
        Some(key) => FallbackPolicy::UseKey(key.clone()),
        None => FallbackPolicy::Error,
    };
    let resolution = catalog.resolve_with(&requested_key, &policy)?;

    let mut warnings = Vec::new();
    if resolution.fell_back {
        warnings.push(JsonWarning::new(
            warning_codes::PRESET_FALLBACK,
            format!(
                "preset '{}' not found, using '{}'",
                requested_key, resolution.key
            ),
        ));
    }

    let request = SynthesisRequest::builder(resolution.spec)
        .duration_seconds(duration_seconds(options.minutes, options.seconds))
        .carrier_hz(options.carrier_hz.unwrap_or(DEFAULT_CARRIER_HZ))
        .sample_rate(options.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE))
        .build();
    validate_request_with_budget(&request, &budget.synthesis)?;
    let hash = request_hash(&request)?;

    let output = options
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(suggested_filename(&resolution.key)));
    let output_str = output.display().to_string();

    let (left_hz, right_hz, num_frames, size_bytes, pcm_hash) = if options.stream {
        let summary = write_output(&output, |writer| {
            Ok(write_wav_streaming(writer, &request, &budget.synthesis)?)
        })?;
        (
            summary.left_hz,
            summary.right_hz,
            summary.num_frames,
            summary.bytes_written,
            summary.pcm_hash,
        )
    } else {
        let generated = generate_with_budget(&request, &budget.synthesis)?;
        write_output(&output, |writer| {
            writer
                .write_all(generated.wav.as_bytes())
                .map_err(|err| write_failure(&output, err))
        })?;
        (
            generated.left_hz,
            generated.right_hz,
            generated.wav.num_frames,
            generated.wav.as_bytes().len() as u64,
            generated.wav.pcm_hash,
        )
    };

    tracing::info!(
        path = %output_str,
        key = %resolution.key,
        num_frames,
        "wrote session"
    );

    let result = GenerateResult {
        requested_key,
        resolved_key: resolution.key,
        fell_back: resolution.fell_back,
        spec: resolution.spec,
        left_hz,
        right_hz,
        duration_seconds: request.duration_seconds,
        sample_rate: request.sample_rate,
        num_frames,
        output: output_str,
        size_bytes,
        pcm_hash,
        request_hash: hash,
        budget: budget.name,
        catalog: loaded.source.to_string(),
        streamed: options.stream,
    };
    Ok((result, warnings))
}

fn write_failure(path: &Path, err: std::io::Error) -> Failure {
    Failure::generation(
        error_codes::FILE_WRITE,
        format!("failed to write output: {}", err),
    )
    .with_file(path.display().to_string())
}

/// Creates `path` and runs `write` against it.
///
/// Once the file exists, any failure removes it again, so an error never
/// leaves a truncated WAV behind.
fn write_output<T>(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> std::result::Result<T, Failure>,
) -> std::result::Result<T, Failure> {
    let file = File::create(path).map_err(|err| write_failure(path, err))?;
    let mut writer = BufWriter::new(file);
    let outcome = write(&mut writer).and_then(|value| {
        writer.flush().map_err(|err| write_failure(path, err))?;
        Ok(value)
    });

    if outcome.is_err() {
        drop(writer);
        if let Err(err) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), %err, "could not remove partial output");
        }
    }
    outcome
}

fn print_human(result: &GenerateResult, warnings: &[JsonWarning]) {
    for warning in warnings {
        println!("{} {}", "warning:".yellow().bold(), warning.message);
    }

    println!("{} {}", "Preset:".cyan().bold(), result.resolved_key);
    println!("{} {}", "Spec:".dimmed(), result.spec);
    println!(
        "{} {} Hz / {} Hz (beat {} Hz)",
        "Channels:".dimmed(),
        result.left_hz,
        result.right_hz,
        result.right_hz - result.left_hz
    );
    println!(
        "{} {} s at {} Hz, {} frames",
        "Duration:".dimmed(),
        result.duration_seconds,
        result.sample_rate,
        result.num_frames
    );
    if result.budget != "default" {
        println!("{} {}", "Budget:".dimmed(), result.budget);
    }
    println!("{} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);
    println!(
        "{} {} ({} bytes)",
        "Wrote".green().bold(),
        result.output,
        result.size_bytes
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::json_output::EXIT_GENERATION_ERROR;

    #[test]
    fn test_failed_write_removes_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.wav");

        let failure = write_output(&path, |writer| -> std::result::Result<(), Failure> {
            writer.write_all(b"RIFF").map_err(|err| write_failure(&path, err))?;
            Err(Failure::generation("AUDIO_003", "disk full"))
        })
        .unwrap_err();

        assert_eq!(failure.code, "AUDIO_003");
        assert!(!path.exists());
    }

    #[test]
    fn test_successful_write_is_flushed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("complete.wav");

        let written = write_output(&path, |writer| {
            writer.write_all(b"RIFF").map_err(|err| write_failure(&path, err))?;
            Ok(4)
        })
        .unwrap();

        assert_eq!(written, 4);
        assert_eq!(std::fs::read(&path).unwrap(), b"RIFF");
    }

    #[test]
    fn test_uncreatable_output_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.wav");

        let failure = write_output(&path, |_| Ok(())).unwrap_err();
        assert_eq!(failure.code, error_codes::FILE_WRITE);
        assert_eq!(failure.exit, EXIT_GENERATION_ERROR);
    }
}
