//! WAV encoding result type.

use super::format::HEADER_SIZE;

/// MIME type of every encoded file.
pub const MIME_TYPE: &str = "audio/wav";

/// A complete in-memory WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudio {
    /// Complete WAV file bytes.
    pub bytes: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of stereo frames.
    pub num_frames: usize,
}

impl EncodedAudio {
    /// MIME type of the bytes.
    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }

    /// Complete file bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Takes ownership of the file bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The PCM payload after the header.
    pub fn pcm_data(&self) -> &[u8] {
        &self.bytes[HEADER_SIZE..]
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}
