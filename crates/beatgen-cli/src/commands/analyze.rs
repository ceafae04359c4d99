//! Analyze command implementation
//!
//! Measures a generated WAV file: per-channel dominant frequency, detected
//! beat, and peak levels.

use std::fs;
use std::process::ExitCode;

use anyhow::Result;
use beatgen_spec::BackendError;
use colored::Colorize;

use super::json_output::{error_codes, print_json, CommandOutput, Failure};
use crate::analysis::{analyze_wav, ChannelAnalysis, WavAnalysis};

/// Run the analyze command
///
/// # Returns
/// Exit code: 0 success, 1 unreadable or undecodable input
pub fn run(input_path: &str, json_output: bool) -> Result<ExitCode> {
    let outcome = analyze_file(input_path);

    if json_output {
        let (output, code) = match outcome {
            Ok(analysis) => (CommandOutput::success(analysis, Vec::new()), ExitCode::SUCCESS),
            Err(failure) => (CommandOutput::failure(vec![failure.to_json()]), failure.exit_code()),
        };
        print_json(&output)?;
        return Ok(code);
    }

    match outcome {
        Ok(analysis) => {
            print_human(input_path, &analysis);
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("{} [{}] {}", "error:".red().bold(), failure.code, failure);
            Ok(failure.exit_code())
        }
    }
}

/// Reads and analyzes one file.
pub fn analyze_file(input_path: &str) -> std::result::Result<WavAnalysis, Failure> {
    let data = fs::read(input_path).map_err(|e| {
        Failure::request(error_codes::FILE_READ, format!("failed to read file: {}", e))
            .with_file(input_path)
    })?;

    // Undecodable input is a request error, not a generation error.
    analyze_wav(&data)
        .map_err(|e| Failure::request(e.code(), e.to_string()).with_file(input_path))
}

fn print_human(input_path: &str, analysis: &WavAnalysis) {
    println!("{} {}", "Analyzing:".cyan().bold(), input_path);
    println!(
        "{} {} Hz, {} frames ({} s)",
        "Format:".dimmed(),
        analysis.sample_rate,
        analysis.num_frames,
        analysis.duration_seconds
    );
    println!("{} {}", "PCM hash:".dimmed(), &analysis.pcm_hash[..16]);

    print_channel("Left:", &analysis.left);
    print_channel("Right:", &analysis.right);

    match analysis.beat_hz {
        Some(beat) => {
            let resolution = analysis.resolution_hz.unwrap_or(0.0);
            println!(
                "{} {} Hz (±{} Hz)",
                "Beat:".green().bold(),
                beat,
                resolution
            );
        }
        None => println!("{} {}", "Beat:".yellow().bold(), "not detected"),
    }
    if analysis.identical_channels {
        println!("{}", "Channels are identical (fixed tone)".dimmed());
    }
}

fn print_channel(label: &str, channel: &ChannelAnalysis) {
    let frequency = channel
        .dominant_hz
        .map(|hz| format!("{} Hz", hz))
        .unwrap_or_else(|| "-".to_string());
    let level = channel
        .peak_dbfs
        .map(|db| format!("{} dBFS", db))
        .unwrap_or_else(|| "silent".to_string());
    println!(
        "{} {} peak {} rms {}",
        label.bold(),
        frequency,
        level,
        channel.rms
    );
}
