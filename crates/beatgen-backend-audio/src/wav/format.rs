//! WAV file format parameters.

/// Size of the canonical RIFF/WAVE header in bytes.
pub const HEADER_SIZE: usize = 44;

/// Size of the `fmt ` chunk body for plain PCM.
pub(crate) const FMT_CHUNK_SIZE: u32 = 16;

/// `wFormatTag` for integer PCM.
pub(crate) const PCM_FORMAT_TAG: u16 = 1;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates the 16-bit stereo format every output uses.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes per sample, per channel.
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second, or `None` if it does not fit the 32-bit header field.
    pub fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(self.block_align() as u32)
    }

    /// Returns true for 16-bit stereo PCM.
    pub fn is_stereo_pcm16(&self) -> bool {
        self.channels == 2 && self.bits_per_sample == 16
    }
}
