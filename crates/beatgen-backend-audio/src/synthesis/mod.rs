//! Stereo sine synthesis.
//!
//! A request's [`FrequencySpec`] is turned into a [`ChannelPlan`] once; the
//! sample loop then evaluates the same two sines for every frame regardless
//! of the preset shape:
//!
//! ```text
//! t_i     = i / sample_rate
//! left_i  = sin(2π · left_hz  · t_i)
//! right_i = sin(2π · right_hz · t_i)
//! ```
//!
//! Samples are quantized to 16 bits with clamping, so no value can wrap.

#[cfg(test)]
mod tests;

use std::f64::consts::TAU;

use beatgen_spec::{validate_request_with_budget, FrequencySpec, SynthesisBudget, SynthesisRequest};

use crate::buffer::{SampleBuffer, StereoFrame};
use crate::error::AudioResult;

/// Full-scale multiplier for 16-bit quantization.
pub const FULL_SCALE: f64 = 32767.0;

/// Frames rendered per block by the streaming path.
pub const DEFAULT_BLOCK_FRAMES: usize = 4096;

/// Quantizes a sample in `[-1, 1]` to a signed 16-bit value.
///
/// Scales by 32767, rounds half away from zero, and clamps to
/// `[-32768, 32767]`. NaN maps to silence.
///
/// ```
/// use beatgen_backend_audio::synthesis::quantize;
///
/// assert_eq!(quantize(1.0), 32767);
/// assert_eq!(quantize(-1.0), -32767);
/// assert_eq!(quantize(1.0000001), 32767);
/// assert_eq!(quantize(-2.0), -32768);
/// assert_eq!(quantize(f64::NAN), 0);
/// ```
pub fn quantize(sample: f64) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    (sample * FULL_SCALE)
        .round()
        .clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Per-channel frequencies resolved from a spec.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelPlan {
    /// Left channel frequency in Hz.
    pub left_hz: f64,
    /// Right channel frequency in Hz.
    pub right_hz: f64,
    /// Both channels carry the same signal; the right is copied from the left.
    pub mirrored: bool,
}

impl ChannelPlan {
    /// Resolves a spec against a carrier. `BandRange` collapses here.
    pub fn new(spec: FrequencySpec, carrier_hz: f64) -> Self {
        let spec = spec.collapse();
        let (left_hz, right_hz) = spec.channel_frequencies(carrier_hz);
        Self {
            left_hz,
            right_hz,
            mirrored: matches!(spec, FrequencySpec::FixedTone { .. }),
        }
    }

    /// Difference between right and left.
    pub fn beat_hz(&self) -> f64 {
        self.right_hz - self.left_hz
    }
}

/// Deterministic two-channel sine generator.
#[derive(Debug, Clone, Copy)]
pub struct ToneSynth {
    plan: ChannelPlan,
    sample_rate: f64,
}

impl ToneSynth {
    /// Creates a synth for a channel plan and sample rate.
    pub fn new(plan: ChannelPlan, sample_rate: u32) -> Self {
        Self {
            plan,
            sample_rate: sample_rate as f64,
        }
    }

    /// Creates a synth for a request. The request is not validated here.
    pub fn for_request(request: &SynthesisRequest) -> Self {
        Self::new(
            ChannelPlan::new(request.spec, request.carrier_hz),
            request.sample_rate,
        )
    }

    /// The channel plan in use.
    pub fn plan(&self) -> ChannelPlan {
        self.plan
    }

    /// Computes frame `index`.
    ///
    /// Time is derived from the absolute index, so any frame can be computed
    /// independently and block boundaries never shift the phase.
    pub fn frame_at(&self, index: usize) -> StereoFrame {
        let t = index as f64 / self.sample_rate;
        let left = quantize((TAU * self.plan.left_hz * t).sin());
        let right = if self.plan.mirrored {
            left
        } else {
            quantize((TAU * self.plan.right_hz * t).sin())
        };
        StereoFrame::new(left, right)
    }

    /// Renders frames `[start, start + len)`.
    pub fn render_block(&self, start: usize, len: usize) -> Vec<StereoFrame> {
        let mut frames = Vec::with_capacity(len);
        self.render_block_into(start, len, &mut frames);
        frames
    }

    /// Like [`render_block`](Self::render_block), reusing `out`'s allocation.
    pub fn render_block_into(&self, start: usize, len: usize, out: &mut Vec<StereoFrame>) {
        out.clear();
        out.extend((start..start + len).map(|i| self.frame_at(i)));
    }

    /// Renders frames `[0, num_frames)`.
    pub fn render(&self, num_frames: usize) -> SampleBuffer {
        let mut frames = Vec::with_capacity(num_frames);
        self.render_block_into(0, num_frames, &mut frames);
        SampleBuffer::new(frames)
    }
}

/// Synthesizes a request under the default budget.
pub fn synthesize(request: &SynthesisRequest) -> AudioResult<SampleBuffer> {
    synthesize_with_budget(request, &SynthesisBudget::default())
}

/// Synthesizes a request under an explicit budget.
///
/// The request is validated before any allocation. The result always has
/// exactly `round(duration_seconds * sample_rate)` frames.
pub fn synthesize_with_budget(
    request: &SynthesisRequest,
    budget: &SynthesisBudget,
) -> AudioResult<SampleBuffer> {
    validate_request_with_budget(request, budget)?;

    let synth = ToneSynth::for_request(request);
    let num_frames = request.num_frames();
    let plan = synth.plan();
    tracing::debug!(
        num_frames,
        left_hz = plan.left_hz,
        right_hz = plan.right_hz,
        sample_rate = request.sample_rate,
        "synthesizing"
    );

    let buffer = synth.render(num_frames);
    tracing::debug!(peak = buffer.peak(), "synthesis complete");
    Ok(buffer)
}
