//! PCM data extraction and hashing utilities.

use super::format::HEADER_SIZE;
use super::reader::RiffChunks;

/// Extracts the `data` chunk payload from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only. Returns `None`
/// when the buffer is not a RIFF/WAVE file or has no complete `data` chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_SIZE {
        return None;
    }
    RiffChunks::new(wav_data)
        .ok()?
        .filter_map(Result::ok)
        .find(|(id, _)| id == b"data")
        .map(|(_, body)| body)
}

/// BLAKE3 hash of raw PCM bytes, as lowercase hex.
pub fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// BLAKE3 hash of the PCM payload of a WAV file.
///
/// Returns `None` if the format is invalid.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(hash_pcm)
}
