//! One-call synthesis plus encoding.

use beatgen_spec::hash::request_hash;
use beatgen_spec::{SynthesisBudget, SynthesisRequest};

use crate::error::AudioResult;
use crate::synthesis::{synthesize_with_budget, ChannelPlan};
use crate::wav::{encode_wav, EncodedAudio};

/// Result of generating a session.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Encoded WAV file.
    pub wav: EncodedAudio,
    /// Left channel frequency in Hz.
    pub left_hz: f64,
    /// Right channel frequency in Hz.
    pub right_hz: f64,
    /// BLAKE3 hash of the canonical request.
    pub request_hash: String,
}

impl GenerateResult {
    /// Perceived beat frequency in Hz.
    pub fn beat_hz(&self) -> f64 {
        self.right_hz - self.left_hz
    }
}

/// Generates a WAV file under the default budget.
///
/// # Example
/// ```
/// use beatgen_backend_audio::generate;
/// use beatgen_spec::{FrequencySpec, SynthesisRequest};
///
/// let request = SynthesisRequest::builder(FrequencySpec::binaural(10.0))
///     .duration_seconds(1.0)
///     .build();
/// let result = generate(&request).unwrap();
/// assert_eq!(result.wav.as_bytes().len(), 44 + 44_100 * 4);
/// assert_eq!(result.beat_hz(), 10.0);
/// ```
pub fn generate(request: &SynthesisRequest) -> AudioResult<GenerateResult> {
    generate_with_budget(request, &SynthesisBudget::default())
}

/// Generates a WAV file under an explicit budget.
pub fn generate_with_budget(
    request: &SynthesisRequest,
    budget: &SynthesisBudget,
) -> AudioResult<GenerateResult> {
    let buffer = synthesize_with_budget(request, budget)?;
    let wav = encode_wav(&buffer, request.sample_rate)?;
    let plan = ChannelPlan::new(request.spec, request.carrier_hz);

    Ok(GenerateResult {
        wav,
        left_hz: plan.left_hz,
        right_hz: plan.right_hz,
        request_hash: request_hash(request)?,
    })
}
