//! Deterministic WAV file writer and reader.
//!
//! This module writes 16-bit stereo PCM WAV files with no timestamps or
//! variable metadata, so the BLAKE3 hash of the PCM payload identifies the
//! audio content.

mod format;
mod pcm;
mod reader;
mod result;
mod stream;
mod writer;


// Re-export public API
pub use format::{WavFormat, HEADER_SIZE};
pub use pcm::{compute_pcm_hash, extract_pcm_data, hash_pcm};
pub use reader::{decode_wav, DecodedWav, RiffChunks};
pub use result::{EncodedAudio, MIME_TYPE};
pub use stream::{write_wav_streaming, write_wav_streaming_blocks, StreamSummary};
pub use writer::{data_chunk_size, encode_wav, header_bytes, write_frames, write_header, write_wav};
