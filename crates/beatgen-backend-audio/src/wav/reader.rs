//! WAV decoding for 16-bit stereo PCM.
//!
//! Only the subset this crate writes is accepted back: integer PCM, two
//! channels, 16 bits. Unknown chunks between `fmt ` and `data` are skipped.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

use super::format::{WavFormat, FMT_CHUNK_SIZE, PCM_FORMAT_TAG};

/// Iterator over the chunks of a RIFF/WAVE buffer.
///
/// Yields `(chunk_id, body)` pairs. Chunk bodies are word aligned, so an odd
/// chunk size is followed by one pad byte.
#[derive(Debug, Clone)]
pub struct RiffChunks<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RiffChunks<'a> {
    /// Checks the RIFF/WAVE preamble and positions at the first chunk.
    pub fn new(data: &'a [u8]) -> AudioResult<Self> {
        if data.len() < 12 {
            return Err(AudioError::decode(format!(
                "file is {} bytes, too short for a RIFF header",
                data.len()
            )));
        }
        if &data[0..4] != b"RIFF" || &data[8..12] != b"WAVE" {
            return Err(AudioError::decode("missing RIFF/WAVE signature"));
        }
        Ok(Self { data, pos: 12 })
    }
}

impl<'a> Iterator for RiffChunks<'a> {
    type Item = AudioResult<([u8; 4], &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos + 8 > self.data.len() {
            return None;
        }

        let header = &self.data[self.pos..self.pos + 8];
        let id = [header[0], header[1], header[2], header[3]];
        let size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;

        let start = self.pos + 8;
        let end = match start.checked_add(size) {
            Some(end) if end <= self.data.len() => end,
            _ => {
                self.pos = self.data.len();
                return Some(Err(AudioError::decode(format!(
                    "chunk '{}' declares {} bytes but only {} remain",
                    String::from_utf8_lossy(&id),
                    size,
                    self.data.len() - start
                ))));
            }
        };

        self.pos = end + (size & 1);
        Some(Ok((id, &self.data[start..end])))
    }
}

/// A decoded WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWav {
    /// Format from the `fmt ` chunk.
    pub format: WavFormat,
    /// Sample frames from the `data` chunk.
    pub buffer: SampleBuffer,
}

impl DecodedWav {
    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.buffer.len() as f64 / self.format.sample_rate as f64
    }
}

/// Decodes a 16-bit stereo PCM WAV file.
pub fn decode_wav(wav_data: &[u8]) -> AudioResult<DecodedWav> {
    let mut format = None;
    let mut pcm = None;

    for chunk in RiffChunks::new(wav_data)? {
        let (id, body) = chunk?;
        match &id {
            b"fmt " => format = Some(parse_fmt(body)?),
            b"data" => {
                pcm = Some(body);
                break;
            }
            _ => {}
        }
    }

    let format = format.ok_or_else(|| AudioError::decode("missing 'fmt ' chunk"))?;
    let pcm = pcm.ok_or_else(|| AudioError::decode("missing 'data' chunk"))?;

    Ok(DecodedWav {
        format,
        buffer: SampleBuffer::from_pcm_bytes(pcm)?,
    })
}

fn parse_fmt(body: &[u8]) -> AudioResult<WavFormat> {
    if body.len() < FMT_CHUNK_SIZE as usize {
        return Err(AudioError::decode(format!(
            "'fmt ' chunk is {} bytes, expected at least {}",
            body.len(),
            FMT_CHUNK_SIZE
        )));
    }

    let u16_at = |offset: usize| u16::from_le_bytes([body[offset], body[offset + 1]]);
    let u32_at = |offset: usize| {
        u32::from_le_bytes([
            body[offset],
            body[offset + 1],
            body[offset + 2],
            body[offset + 3],
        ])
    };

    let format_tag = u16_at(0);
    if format_tag != PCM_FORMAT_TAG {
        return Err(AudioError::decode(format!(
            "unsupported format tag {}, only PCM is accepted",
            format_tag
        )));
    }

    let format = WavFormat {
        channels: u16_at(2),
        sample_rate: u32_at(4),
        bits_per_sample: u16_at(14),
    };
    if !format.is_stereo_pcm16() {
        return Err(AudioError::decode(format!(
            "expected 16-bit stereo, got {} channel(s) at {} bits",
            format.channels, format.bits_per_sample
        )));
    }
    if format.sample_rate == 0 {
        return Err(AudioError::decode("sample rate is zero"));
    }
    if u16_at(12) != format.block_align() || format.byte_rate() != Some(u32_at(8)) {
        return Err(AudioError::decode(
            "block align or byte rate disagrees with channel layout",
        ));
    }

    Ok(format)
}
