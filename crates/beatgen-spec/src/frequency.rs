//! Frequency specifications resolved from presets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::validation::validate_positive;

/// Resolved frequency information for a preset.
///
/// ```
/// use beatgen_spec::FrequencySpec;
///
/// let theta = FrequencySpec::BandRange { low_hz: 4.0, high_hz: 8.0 };
/// assert_eq!(theta.collapse(), FrequencySpec::BinauralBeat { beat_hz: 6.0 });
/// assert_eq!(theta.channel_frequencies(200.0), (200.0, 206.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum FrequencySpec {
    /// Both channels carry the same pure frequency.
    FixedTone {
        /// Tone frequency in Hz.
        frequency_hz: f64,
    },
    /// Left channel carries the carrier, right carries carrier + beat.
    BinauralBeat {
        /// Beat (offset) frequency in Hz.
        beat_hz: f64,
    },
    /// Descriptive band; synthesized at the midpoint as a binaural beat.
    BandRange {
        /// Lower bound in Hz.
        low_hz: f64,
        /// Upper bound in Hz.
        high_hz: f64,
    },
}

impl FrequencySpec {
    /// Creates a binaural beat spec.
    pub fn binaural(beat_hz: f64) -> Self {
        Self::BinauralBeat { beat_hz }
    }

    /// Creates a fixed tone spec.
    pub fn fixed(frequency_hz: f64) -> Self {
        Self::FixedTone { frequency_hz }
    }

    /// Creates a band range spec.
    pub fn band(low_hz: f64, high_hz: f64) -> Self {
        Self::BandRange { low_hz, high_hz }
    }

    /// Collapses a `BandRange` into the `BinauralBeat` at its midpoint.
    ///
    /// The other shapes are returned unchanged.
    pub fn collapse(self) -> Self {
        match self {
            FrequencySpec::BandRange { low_hz, high_hz } => FrequencySpec::BinauralBeat {
                beat_hz: (low_hz + high_hz) / 2.0,
            },
            other => other,
        }
    }

    /// Returns the left/right difference this spec produces.
    pub fn beat_hz(&self) -> f64 {
        match *self {
            FrequencySpec::FixedTone { .. } => 0.0,
            FrequencySpec::BinauralBeat { beat_hz } => beat_hz,
            FrequencySpec::BandRange { low_hz, high_hz } => (low_hz + high_hz) / 2.0,
        }
    }

    /// Returns `(left_hz, right_hz)` for the given carrier.
    ///
    /// `FixedTone` ignores the carrier.
    pub fn channel_frequencies(&self, carrier_hz: f64) -> (f64, f64) {
        match *self {
            FrequencySpec::FixedTone { frequency_hz } => (frequency_hz, frequency_hz),
            _ => (carrier_hz, carrier_hz + self.beat_hz()),
        }
    }

    /// Returns true when the right channel depends on a carrier frequency.
    pub fn uses_carrier(&self) -> bool {
        !matches!(self, FrequencySpec::FixedTone { .. })
    }

    /// Checks the positivity and ordering invariants.
    pub fn validate(&self) -> SpecResult<()> {
        match *self {
            FrequencySpec::FixedTone { frequency_hz } => {
                validate_positive("frequency_hz", frequency_hz)
            }
            FrequencySpec::BinauralBeat { beat_hz } => validate_positive("beat_hz", beat_hz),
            FrequencySpec::BandRange { low_hz, high_hz } => {
                validate_positive("low_hz", low_hz)?;
                validate_positive("high_hz", high_hz)?;
                if high_hz <= low_hz {
                    return Err(SpecError::invalid_param(
                        "high_hz",
                        format!("must be greater than low_hz ({} <= {})", high_hz, low_hz),
                    ));
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for FrequencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrequencySpec::FixedTone { frequency_hz } => write!(f, "fixed tone {} Hz", frequency_hz),
            FrequencySpec::BinauralBeat { beat_hz } => write!(f, "binaural beat {} Hz", beat_hz),
            FrequencySpec::BandRange { low_hz, high_hz } => {
                write!(f, "band {}-{} Hz", low_hz, high_hz)
            }
        }
    }
}

/// Descriptive frequency range attached to catalog entries ("8-14 Hz").
///
/// Presentation metadata only; synthesis never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrequencyRange {
    /// Lower bound in Hz.
    pub low_hz: f64,
    /// Upper bound in Hz.
    pub high_hz: f64,
}

impl FrequencyRange {
    /// Returns true if `hz` lies within the range (inclusive).
    pub fn contains(&self, hz: f64) -> bool {
        hz >= self.low_hz && hz <= self.high_hz
    }
}

impl fmt::Display for FrequencyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} Hz", self.low_hz, self.high_hz)
    }
}
