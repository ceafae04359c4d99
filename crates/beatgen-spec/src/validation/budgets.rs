//! Budget definitions for synthesis requests.
//!
//! Budgets bound memory use before anything is allocated. Raw PCM grows as
//! `duration_seconds * sample_rate * 2 channels * 2 bytes`: a 120 minute
//! session at 44.1 kHz is about 1.27 GB before encoding, so every request is
//! checked against a ceiling.
//!
//! Pre-defined profiles: `default`, `short`, `preview`.

use serde::{Deserialize, Serialize};

/// Synthesis budget limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisBudget {
    /// Minimum duration in seconds (inclusive).
    pub min_duration_seconds: f64,
    /// Maximum duration in seconds (inclusive).
    pub max_duration_seconds: f64,
    /// Maximum number of stereo frames.
    pub max_frames: usize,
    /// Allowed sample rates.
    pub allowed_sample_rates: Vec<u32>,
}

impl Default for SynthesisBudget {
    fn default() -> Self {
        Self {
            min_duration_seconds: Self::DEFAULT_MIN_DURATION_SECONDS,
            max_duration_seconds: Self::DEFAULT_MAX_DURATION_SECONDS,
            max_frames: 7200 * 48_000, // 120 minutes at 48kHz
            allowed_sample_rates: Self::DEFAULT_ALLOWED_SAMPLE_RATES.to_vec(),
        }
    }
}

impl SynthesisBudget {
    /// Default minimum duration in seconds.
    pub const DEFAULT_MIN_DURATION_SECONDS: f64 = 1.0;

    /// Default maximum duration in seconds (120 minutes).
    pub const DEFAULT_MAX_DURATION_SECONDS: f64 = 7200.0;

    /// Default allowed sample rates.
    pub const DEFAULT_ALLOWED_SAMPLE_RATES: &'static [u32] = &[22050, 44100, 48000];

    /// Returns true if the sample rate is allowed by this budget.
    pub fn allows_sample_rate(&self, sample_rate: u32) -> bool {
        self.allowed_sample_rates.contains(&sample_rate)
    }

    /// Peak raw PCM size in bytes a request within this budget can reach.
    pub fn max_pcm_bytes(&self) -> u64 {
        self.max_frames as u64 * 4
    }
}

/// Named budget profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetProfile {
    /// Profile name.
    pub name: String,
    /// Synthesis limits.
    pub synthesis: SynthesisBudget,
}

impl Default for BudgetProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            synthesis: SynthesisBudget::default(),
        }
    }
}

impl BudgetProfile {
    /// Names accepted by [`BudgetProfile::by_name`].
    pub const NAMES: &'static [&'static str] = &["default", "short", "preview"];

    /// Creates a new budget profile with the given name and default limits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sessions of at most 60 minutes.
    pub fn short() -> Self {
        Self {
            name: "short".to_string(),
            synthesis: SynthesisBudget {
                max_duration_seconds: 3600.0,
                max_frames: 3600 * 48_000,
                ..SynthesisBudget::default()
            },
        }
    }

    /// Clips of at most 30 seconds, for quick listening checks.
    pub fn preview() -> Self {
        Self {
            name: "preview".to_string(),
            synthesis: SynthesisBudget {
                min_duration_seconds: 0.1,
                max_duration_seconds: 30.0,
                max_frames: 30 * 48_000,
                ..SynthesisBudget::default()
            },
        }
    }

    /// Looks up a profile by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "short" => Some(Self::short()),
            "preview" => Some(Self::preview()),
            _ => None,
        }
    }
}
