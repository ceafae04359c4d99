//! beatgen Audio Backend
//!
//! Deterministic stereo tone synthesis and 16-bit PCM WAV encoding.
//!
//! # Overview
//!
//! A validated [`SynthesisRequest`](beatgen_spec::SynthesisRequest) is
//! rendered into a [`SampleBuffer`] of interleaved 16-bit frames, then
//! wrapped in a canonical 44-byte RIFF/WAVE header. For a binaural beat the
//! left channel carries the carrier and the right channel carries carrier
//! plus beat; a fixed tone puts the same sine in both.
//!
//! # Determinism
//!
//! Output depends only on the request. There is no randomness, no
//! timestamps, and no metadata chunk, so identical requests produce
//! byte-identical files and equal PCM hashes.
//!
//! # Example
//!
//! ```
//! use beatgen_backend_audio::{decode_wav, generate};
//! use beatgen_spec::{FrequencySpec, SynthesisRequest};
//!
//! let request = SynthesisRequest::builder(FrequencySpec::binaural(6.0))
//!     .duration_seconds(2.0)
//!     .sample_rate(22_050)
//!     .build();
//! let result = generate(&request).unwrap();
//!
//! let decoded = decode_wav(result.wav.as_bytes()).unwrap();
//! assert_eq!(decoded.buffer.len(), 44_100);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Synthesis plus encoding in one call
//! - [`buffer`] - Stereo frame buffer
//! - [`synthesis`] - Sine rendering and quantization
//! - [`wav`] - Deterministic WAV writer, streaming writer, and reader

pub mod buffer;
pub mod error;
pub mod generate;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use buffer::{Channel, SampleBuffer, StereoFrame};
pub use error::{AudioError, AudioResult};
pub use generate::{generate, generate_with_budget, GenerateResult};
pub use synthesis::{quantize, synthesize, synthesize_with_budget, ChannelPlan, ToneSynth};
pub use wav::{
    decode_wav, encode_wav, write_wav, write_wav_streaming, DecodedWav, EncodedAudio,
    StreamSummary, WavFormat,
};
