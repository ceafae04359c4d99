//! Synthesis request type and builder.

use serde::{Deserialize, Serialize};

use crate::frequency::FrequencySpec;

/// Default carrier frequency in Hz.
pub const DEFAULT_CARRIER_HZ: f64 = 220.0;

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default session length in minutes.
pub const DEFAULT_DURATION_MINUTES: f64 = 15.0;

fn default_carrier_hz() -> f64 {
    DEFAULT_CARRIER_HZ
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

/// Everything needed to synthesize one stereo buffer.
///
/// Construct with [`SynthesisRequest::builder`]; validate with
/// [`crate::validation::validate_request`] before synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisRequest {
    /// Resolved frequency spec.
    pub spec: FrequencySpec,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Carrier frequency in Hz (left channel of a binaural beat).
    #[serde(default = "default_carrier_hz")]
    pub carrier_hz: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl SynthesisRequest {
    /// Creates a builder for the given spec.
    pub fn builder(spec: FrequencySpec) -> SynthesisRequestBuilder {
        SynthesisRequestBuilder::new(spec)
    }

    /// Number of stereo frames: `round(duration_seconds * sample_rate)`.
    ///
    /// Only meaningful for a validated request.
    pub fn num_frames(&self) -> usize {
        (self.duration_seconds * self.sample_rate as f64).round() as usize
    }

    /// Returns `(left_hz, right_hz)` for this request.
    pub fn channel_frequencies(&self) -> (f64, f64) {
        self.spec.channel_frequencies(self.carrier_hz)
    }

    /// Size of the raw 16-bit stereo PCM payload in bytes.
    pub fn pcm_size_bytes(&self) -> u64 {
        self.num_frames() as u64 * 4
    }
}

/// Builder for [`SynthesisRequest`].
///
/// ```
/// use beatgen_spec::{FrequencySpec, SynthesisRequest};
///
/// let request = SynthesisRequest::builder(FrequencySpec::binaural(10.0))
///     .duration_seconds(1.0)
///     .carrier_hz(220.0)
///     .build();
/// assert_eq!(request.num_frames(), 44_100);
/// ```
#[derive(Debug, Clone)]
pub struct SynthesisRequestBuilder {
    spec: FrequencySpec,
    duration_seconds: f64,
    carrier_hz: f64,
    sample_rate: u32,
}

impl SynthesisRequestBuilder {
    /// Creates a new builder with default carrier, sample rate and duration.
    pub fn new(spec: FrequencySpec) -> Self {
        Self {
            spec,
            duration_seconds: DEFAULT_DURATION_MINUTES * 60.0,
            carrier_hz: DEFAULT_CARRIER_HZ,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Sets the duration in seconds.
    pub fn duration_seconds(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Sets the duration in minutes.
    pub fn duration_minutes(mut self, minutes: f64) -> Self {
        self.duration_seconds = minutes * 60.0;
        self
    }

    /// Sets the carrier frequency.
    pub fn carrier_hz(mut self, carrier_hz: f64) -> Self {
        self.carrier_hz = carrier_hz;
        self
    }

    /// Sets the sample rate.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Builds the request. No validation happens here.
    pub fn build(self) -> SynthesisRequest {
        SynthesisRequest {
            spec: self.spec,
            duration_seconds: self.duration_seconds,
            carrier_hz: self.carrier_hz,
            sample_rate: self.sample_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_defaults() {
        let request = SynthesisRequest::builder(FrequencySpec::binaural(10.0)).build();
        assert_eq!(request.carrier_hz, 220.0);
        assert_eq!(request.sample_rate, 44_100);
        assert_eq!(request.duration_seconds, 900.0);
    }

    #[test]
    fn test_num_frames_rounds() {
        let request = SynthesisRequest::builder(FrequencySpec::binaural(10.0))
            .duration_seconds(0.5)
            .sample_rate(44_100)
            .build();
        // 22050.0 exactly
        assert_eq!(request.num_frames(), 22_050);

        let request = SynthesisRequest::builder(FrequencySpec::binaural(10.0))
            .duration_seconds(0.00001)
            .sample_rate(44_100)
            .build();
        // 0.441 rounds down
        assert_eq!(request.num_frames(), 0);

        let request = SynthesisRequest::builder(FrequencySpec::binaural(10.0))
            .duration_seconds(1.0 / 3.0)
            .sample_rate(22_050)
            .build();
        assert_eq!(request.num_frames(), 7_350);
    }

    #[test]
    fn test_duration_minutes() {
        let request = SynthesisRequest::builder(FrequencySpec::binaural(10.0))
            .duration_minutes(2.5)
            .build();
        assert_eq!(request.duration_seconds, 150.0);
        assert_eq!(request.pcm_size_bytes(), 150 * 44_100 * 4);
    }

    #[test]
    fn test_json_defaults_applied() {
        let json = r#"{"spec":{"type":"binaural_beat","beat_hz":6.0},"duration_seconds":60.0}"#;
        let request: SynthesisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.carrier_hz, DEFAULT_CARRIER_HZ);
        assert_eq!(request.sample_rate, DEFAULT_SAMPLE_RATE);
        assert_eq!(request.channel_frequencies(), (220.0, 226.0));
    }
}
