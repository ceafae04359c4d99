//! beatgen CLI - Command-line interface for binaural beat generation
//!
//! This binary resolves presets, writes deterministic WAV sessions, lists the
//! preset catalog, and analyzes generated files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Use modules from the library crate
use beatgen_cli::commands;
use beatgen_cli::commands::generate::GenerateOptions;

/// beatgen - Deterministic binaural beat generator
#[derive(Parser)]
#[command(name = "beatgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a WAV session from a preset
    Generate {
        /// Preset key or slug (default: the catalog's default preset)
        #[arg(short, long)]
        preset: Option<String>,

        /// Duration in minutes (default: 15)
        #[arg(short, long, conflicts_with = "seconds")]
        minutes: Option<f64>,

        /// Duration in seconds
        #[arg(short, long)]
        seconds: Option<f64>,

        /// Carrier frequency in Hz (default: 220)
        #[arg(short, long)]
        carrier: Option<f64>,

        /// Sample rate in Hz (default: 44100)
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Preset catalog JSON file (default: built-in)
        #[arg(long, env = "BEATGEN_CATALOG")]
        catalog: Option<String>,

        /// Preset to use when --preset is not in the catalog
        #[arg(long)]
        fallback: Option<String>,

        /// Budget profile (default, short, preview)
        #[arg(long)]
        budget: Option<String>,

        /// Output file path (default: derived from the preset key)
        #[arg(short, long)]
        output: Option<String>,

        /// Render in blocks straight to the file instead of in memory
        #[arg(long)]
        stream: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the presets in the catalog
    Presets {
        /// Preset catalog JSON file (default: built-in)
        #[arg(long, env = "BEATGEN_CATALOG")]
        catalog: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Analyze a WAV file: dominant frequency per channel and detected beat
    Analyze {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            preset,
            minutes,
            seconds,
            carrier,
            sample_rate,
            catalog,
            fallback,
            budget,
            output,
            stream,
            json,
        } => {
            let options = GenerateOptions {
                preset,
                minutes,
                seconds,
                carrier_hz: carrier,
                sample_rate,
                catalog,
                fallback,
                budget,
                output,
                stream,
            };
            commands::generate::run(&options, json)
        }
        Commands::Presets { catalog, json } => commands::presets::run(catalog.as_deref(), json),
        Commands::Analyze { input, json } => commands::analyze::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
