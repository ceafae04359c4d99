//! Core WAV writing functions.
//!
//! The header is always the canonical 44 bytes: `RIFF`, `fmt ` (16-byte PCM
//! body), `data`. No `LIST`/`INFO` chunk and no timestamps are written, so
//! identical frames always produce identical files.

use std::io::Write;

use crate::buffer::{SampleBuffer, StereoFrame};
use crate::error::{AudioError, AudioResult};

use super::format::{WavFormat, FMT_CHUNK_SIZE, HEADER_SIZE, PCM_FORMAT_TAG};
use super::pcm::hash_pcm;
use super::result::EncodedAudio;

/// Bytes of the RIFF size field that precede the data payload: `WAVE`, the
/// `fmt ` chunk, and the `data` chunk header.
const RIFF_OVERHEAD: u32 = (HEADER_SIZE - 8) as u32;

/// Size of the `data` payload for `num_frames` frames.
///
/// Fails with [`AudioError::EncodingFailure`] if the payload or the RIFF
/// size field would exceed `u32::MAX`.
pub fn data_chunk_size(format: &WavFormat, num_frames: usize) -> AudioResult<u32> {
    (num_frames as u64)
        .checked_mul(format.block_align() as u64)
        .filter(|&size| size <= (u32::MAX - RIFF_OVERHEAD) as u64)
        .map(|size| size as u32)
        .ok_or_else(|| {
            AudioError::encoding(format!(
                "{} frames exceed the RIFF 32-bit size limit",
                num_frames
            ))
        })
}

/// Builds the canonical 44-byte header for `num_frames` frames.
pub fn header_bytes(format: &WavFormat, num_frames: usize) -> AudioResult<[u8; HEADER_SIZE]> {
    if format.sample_rate == 0 {
        return Err(AudioError::encoding("sample rate must be greater than zero"));
    }
    let byte_rate = format.byte_rate().ok_or_else(|| {
        AudioError::encoding(format!(
            "byte rate for {} Hz does not fit in 32 bits",
            format.sample_rate
        ))
    })?;
    let data_size = data_chunk_size(format, num_frames)?;

    let mut header = [0u8; HEADER_SIZE];
    let fields: [&[u8]; 13] = [
        b"RIFF",
        &(RIFF_OVERHEAD + data_size).to_le_bytes(),
        b"WAVE",
        b"fmt ",
        &FMT_CHUNK_SIZE.to_le_bytes(),
        &PCM_FORMAT_TAG.to_le_bytes(),
        &format.channels.to_le_bytes(),
        &format.sample_rate.to_le_bytes(),
        &byte_rate.to_le_bytes(),
        &format.block_align().to_le_bytes(),
        &format.bits_per_sample.to_le_bytes(),
        b"data",
        &data_size.to_le_bytes(),
    ];

    let mut pos = 0;
    for field in fields {
        header[pos..pos + field.len()].copy_from_slice(field);
        pos += field.len();
    }
    debug_assert_eq!(pos, HEADER_SIZE);

    Ok(header)
}

/// Writes the header for `num_frames` stereo frames at `sample_rate`.
pub fn write_header<W: Write>(writer: &mut W, sample_rate: u32, num_frames: usize) -> AudioResult<()> {
    let header = header_bytes(&WavFormat::stereo(sample_rate), num_frames)?;
    writer.write_all(&header)?;
    Ok(())
}

/// Appends interleaved little-endian frames to `out`.
pub(crate) fn append_frames(out: &mut Vec<u8>, frames: &[StereoFrame]) {
    out.reserve(frames.len() * 4);
    for frame in frames {
        out.extend_from_slice(&frame.to_le_bytes());
    }
}

/// Writes interleaved little-endian frames.
pub fn write_frames<W: Write>(writer: &mut W, frames: &[StereoFrame]) -> AudioResult<()> {
    let mut bytes = Vec::with_capacity(frames.len() * 4);
    append_frames(&mut bytes, frames);
    writer.write_all(&bytes)?;
    Ok(())
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, buffer: &SampleBuffer, sample_rate: u32) -> AudioResult<()> {
    write_header(writer, sample_rate, buffer.len())?;
    write_frames(writer, buffer.frames())
}

/// Encodes a sample buffer as a complete in-memory WAV file.
///
/// An empty buffer yields a valid 44-byte file with a zero-length `data`
/// chunk.
///
/// # Example
/// ```
/// use beatgen_backend_audio::{encode_wav, SampleBuffer};
///
/// let wav = encode_wav(&SampleBuffer::default(), 44_100).unwrap();
/// assert_eq!(wav.as_bytes().len(), 44);
/// assert!(encode_wav(&SampleBuffer::default(), 0).is_err());
/// ```
pub fn encode_wav(buffer: &SampleBuffer, sample_rate: u32) -> AudioResult<EncodedAudio> {
    let header = header_bytes(&WavFormat::stereo(sample_rate), buffer.len())?;

    let mut bytes = Vec::with_capacity(HEADER_SIZE + buffer.len() * 4);
    bytes.extend_from_slice(&header);
    append_frames(&mut bytes, buffer.frames());

    let pcm_hash = hash_pcm(&bytes[HEADER_SIZE..]);
    tracing::debug!(
        num_frames = buffer.len(),
        size_bytes = bytes.len(),
        "encoded WAV"
    );

    Ok(EncodedAudio {
        bytes,
        pcm_hash,
        sample_rate,
        num_frames: buffer.len(),
    })
}
