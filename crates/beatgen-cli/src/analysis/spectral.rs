//! Dominant-frequency detection.

use rustfft::{num_complex::Complex, FftPlanner};

/// Largest FFT frame. At 44.1 kHz this resolves about 0.17 Hz.
pub const MAX_FFT_SIZE: usize = 1 << 18;

/// Frequencies below this are ignored when picking the peak.
const MIN_FREQUENCY_HZ: f64 = 20.0;

/// Strongest spectral component of a signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    /// Frequency of the strongest bin in Hz.
    pub frequency_hz: f64,
    /// Width of one bin in Hz.
    pub resolution_hz: f64,
}

/// Finds the strongest frequency above 20 Hz.
///
/// Uses a Hann-windowed FFT over the first `MAX_FFT_SIZE` samples, zero
/// padded to a power of two. Returns `None` for fewer than 64 samples or a
/// silent signal.
pub fn dominant_frequency(samples: &[f32], sample_rate: u32) -> Option<SpectralPeak> {
    if samples.len() < 64 || sample_rate == 0 {
        return None;
    }

    let fft_size = samples.len().next_power_of_two().min(MAX_FFT_SIZE);
    let frame_len = samples.len().min(fft_size);

    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .take(frame_len)
        .enumerate()
        .map(|(i, &s)| {
            let window =
                0.5 * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / frame_len as f64).cos());
            Complex::new(s as f64 * window, 0.0)
        })
        .collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(fft_size).process(&mut buffer);

    let nyquist = fft_size / 2;
    let resolution_hz = sample_rate as f64 / fft_size as f64;
    let min_bin = (MIN_FREQUENCY_HZ / resolution_hz).ceil() as usize;

    let mut max_magnitude = 0.0;
    let mut max_bin = None;
    for (i, c) in buffer.iter().take(nyquist).enumerate().skip(min_bin) {
        let magnitude = c.norm_sqr();
        if magnitude > max_magnitude {
            max_magnitude = magnitude;
            max_bin = Some(i);
        }
    }

    max_bin.map(|bin| SpectralPeak {
        frequency_hz: bin as f64 * resolution_hz,
        resolution_hz,
    })
}
