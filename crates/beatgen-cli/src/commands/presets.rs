//! Presets command implementation
//!
//! Lists the catalog: keys, resolved specs, ranges, and descriptions.

use std::process::ExitCode;

use anyhow::Result;
use beatgen_spec::suggested_filename;
use colored::Colorize;

use super::json_output::{print_json, CommandOutput, Failure, PresetRecord, PresetsResult};
use crate::input::load_catalog;

/// Run the presets command
///
/// # Returns
/// Exit code: 0 success, 1 catalog error
pub fn run(catalog_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let outcome = collect(catalog_path);

    if json_output {
        let (output, code) = match outcome {
            Ok(result) => (CommandOutput::success(result, Vec::new()), ExitCode::SUCCESS),
            Err(failure) => (CommandOutput::failure(vec![failure.to_json()]), failure.exit_code()),
        };
        print_json(&output)?;
        return Ok(code);
    }

    match outcome {
        Ok(result) => {
            print_human(&result);
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("{} [{}] {}", "error:".red().bold(), failure.code, failure);
            Ok(failure.exit_code())
        }
    }
}

/// Loads the catalog and builds one record per preset.
pub fn collect(catalog_path: Option<&str>) -> std::result::Result<PresetsResult, Failure> {
    let loaded = load_catalog(catalog_path)?;
    let presets = loaded
        .catalog
        .iter()
        .map(|info| PresetRecord {
            key: info.key.to_string(),
            spec: info.spec,
            alias: info.alias.map(str::to_string),
            range_low_hz: info.range.map(|r| r.low_hz),
            range_high_hz: info.range.map(|r| r.high_hz),
            description: info.description.map(str::to_string),
            filename: suggested_filename(info.key),
        })
        .collect();

    Ok(PresetsResult {
        catalog: loaded.source.to_string(),
        default_key: loaded.catalog.default_key().map(str::to_string),
        presets,
    })
}

fn print_human(result: &PresetsResult) {
    println!("{} {}", "Catalog:".cyan().bold(), result.catalog);

    for preset in &result.presets {
        let marker = if result.default_key.as_deref() == Some(preset.key.as_str()) {
            " (default)".green().to_string()
        } else {
            String::new()
        };
        println!("\n{}{}", preset.key.bold(), marker);

        match &preset.alias {
            Some(target) => println!("  {} {} -> {}", "spec:".dimmed(), target, preset.spec),
            None => println!("  {} {}", "spec:".dimmed(), preset.spec),
        }
        if let (Some(low), Some(high)) = (preset.range_low_hz, preset.range_high_hz) {
            println!("  {} {}-{} Hz", "range:".dimmed(), low, high);
        }
        if let Some(description) = &preset.description {
            println!("  {} {}", "about:".dimmed(), description);
        }
    }
}
