//! Block-wise WAV output.
//!
//! Long sessions are rendered in fixed-size blocks straight to the writer, so
//! peak memory is one block instead of the whole buffer. The header is known
//! up front because the frame count is, and the bytes match [`encode_wav`]
//! exactly.
//!
//! [`encode_wav`]: super::encode_wav

use std::io::Write;

use beatgen_spec::{validate_request_with_budget, SynthesisBudget, SynthesisRequest};

use crate::error::AudioResult;
use crate::synthesis::{ToneSynth, DEFAULT_BLOCK_FRAMES};

use super::format::{WavFormat, HEADER_SIZE};
use super::writer::{append_frames, header_bytes};

/// What a streaming write produced.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamSummary {
    /// Stereo frames written.
    pub num_frames: usize,
    /// Total bytes written, header included.
    pub bytes_written: u64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Left channel frequency in Hz.
    pub left_hz: f64,
    /// Right channel frequency in Hz.
    pub right_hz: f64,
}

/// Validates, synthesizes, and writes a request in default-sized blocks.
pub fn write_wav_streaming<W: Write>(
    writer: &mut W,
    request: &SynthesisRequest,
    budget: &SynthesisBudget,
) -> AudioResult<StreamSummary> {
    write_wav_streaming_blocks(writer, request, budget, DEFAULT_BLOCK_FRAMES)
}

/// Like [`write_wav_streaming`] with an explicit block size.
///
/// A block size of zero is treated as one frame.
pub fn write_wav_streaming_blocks<W: Write>(
    writer: &mut W,
    request: &SynthesisRequest,
    budget: &SynthesisBudget,
    block_frames: usize,
) -> AudioResult<StreamSummary> {
    validate_request_with_budget(request, budget)?;

    let num_frames = request.num_frames();
    let header = header_bytes(&WavFormat::stereo(request.sample_rate), num_frames)?;
    writer.write_all(&header)?;

    let synth = ToneSynth::for_request(request);
    let plan = synth.plan();
    let block_frames = block_frames.max(1);
    tracing::debug!(
        num_frames,
        block_frames,
        left_hz = plan.left_hz,
        right_hz = plan.right_hz,
        "streaming synthesis"
    );

    let mut hasher = blake3::Hasher::new();
    let mut frames = Vec::with_capacity(block_frames.min(num_frames));
    let mut bytes = Vec::with_capacity(block_frames.min(num_frames) * 4);
    let mut start = 0;
    while start < num_frames {
        let len = block_frames.min(num_frames - start);
        synth.render_block_into(start, len, &mut frames);

        bytes.clear();
        append_frames(&mut bytes, &frames);
        hasher.update(&bytes);
        writer.write_all(&bytes)?;

        start += len;
    }
    writer.flush()?;

    Ok(StreamSummary {
        num_frames,
        bytes_written: (HEADER_SIZE + num_frames * 4) as u64,
        pcm_hash: hasher.finalize().to_hex().to_string(),
        left_hz: plan.left_hz,
        right_hz: plan.right_hz,
    })
}
