//! WAV analysis for generated sessions.
//!
//! Decodes a 16-bit stereo file and measures each channel independently, so
//! the detected beat is the difference of two measured frequencies rather
//! than anything read back from the request.

pub mod spectral;

use beatgen_backend_audio::wav::hash_pcm;
use beatgen_backend_audio::{decode_wav, AudioResult, Channel, SampleBuffer};
use serde::Serialize;

pub use spectral::{dominant_frequency, SpectralPeak};

/// Precision for floating point values in output (6 decimal places).
const FLOAT_PRECISION: i32 = 6;

/// Round a float to the specified number of decimal places.
fn round_f64(value: f64, decimals: i32) -> f64 {
    let multiplier = 10_f64.powi(decimals);
    (value * multiplier).round() / multiplier
}

/// Measurements for one channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelAnalysis {
    /// Strongest frequency above 20 Hz.
    pub dominant_hz: Option<f64>,
    /// Largest absolute sample value.
    pub peak: u16,
    /// Peak level relative to full scale; absent for silence.
    pub peak_dbfs: Option<f64>,
    /// RMS level in `[0, 1]`.
    pub rms: f64,
}

/// Measurements for a whole file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WavAnalysis {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Stereo frames.
    pub num_frames: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// FFT bin width used for the frequency estimates.
    pub resolution_hz: Option<f64>,
    /// Left channel.
    pub left: ChannelAnalysis,
    /// Right channel.
    pub right: ChannelAnalysis,
    /// Right minus left dominant frequency.
    pub beat_hz: Option<f64>,
    /// Both channels carry identical samples.
    pub identical_channels: bool,
}

/// Decodes and measures a WAV file.
pub fn analyze_wav(wav_data: &[u8]) -> AudioResult<WavAnalysis> {
    let decoded = decode_wav(wav_data)?;
    let sample_rate = decoded.format.sample_rate;
    let buffer = &decoded.buffer;

    let left_peak = dominant_frequency(&buffer.channel_f32(Channel::Left), sample_rate);
    let right_peak = dominant_frequency(&buffer.channel_f32(Channel::Right), sample_rate);

    let beat_hz = match (left_peak, right_peak) {
        (Some(left), Some(right)) => Some(round_f64(
            right.frequency_hz - left.frequency_hz,
            FLOAT_PRECISION,
        )),
        _ => None,
    };
    tracing::debug!(num_frames = buffer.len(), ?beat_hz, "analyzed WAV");

    Ok(WavAnalysis {
        sample_rate,
        num_frames: buffer.len(),
        duration_seconds: round_f64(decoded.duration_seconds(), FLOAT_PRECISION),
        pcm_hash: hash_pcm(&buffer.to_pcm_bytes()),
        resolution_hz: left_peak
            .or(right_peak)
            .map(|peak| round_f64(peak.resolution_hz, FLOAT_PRECISION)),
        left: channel_analysis(buffer, Channel::Left, left_peak),
        right: channel_analysis(buffer, Channel::Right, right_peak),
        beat_hz,
        identical_channels: buffer.frames().iter().all(|f| f.left == f.right),
    })
}

fn channel_analysis(
    buffer: &SampleBuffer,
    channel: Channel,
    peak_frequency: Option<SpectralPeak>,
) -> ChannelAnalysis {
    let peak = buffer.channel(channel).map(i16::unsigned_abs).max().unwrap_or(0);
    let peak_dbfs = (peak > 0).then(|| round_f64(20.0 * (peak as f64 / 32768.0).log10(), 2));

    let rms = if buffer.is_empty() {
        0.0
    } else {
        let sum_sq: f64 = buffer
            .channel(channel)
            .map(|s| {
                let x = s as f64 / 32768.0;
                x * x
            })
            .sum();
        (sum_sq / buffer.len() as f64).sqrt()
    };

    ChannelAnalysis {
        dominant_hz: peak_frequency.map(|p| round_f64(p.frequency_hz, FLOAT_PRECISION)),
        peak,
        peak_dbfs,
        rms: round_f64(rms, FLOAT_PRECISION),
    }
}
