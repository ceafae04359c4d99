//! Canonical hashing of synthesis requests.
//!
//! ```text
//! request_hash = hex(BLAKE3(canonical_json(request)))
//! ```
//!
//! Canonical JSON has lexicographically sorted object keys and no whitespace.
//! Two requests hash equal exactly when they would synthesize the same buffer.

use serde::Serialize;

use crate::error::SpecResult;
use crate::request::{SynthesisRequest, DEFAULT_CARRIER_HZ};

/// Computes the canonical BLAKE3 hash of a request.
///
/// `BandRange` specs hash as the `BinauralBeat` they collapse to, and a
/// `FixedTone` hashes with the default carrier since it never reads one.
///
/// # Example
/// ```
/// use beatgen_spec::{FrequencySpec, SynthesisRequest};
/// use beatgen_spec::hash::request_hash;
///
/// let request = SynthesisRequest::builder(FrequencySpec::binaural(10.0))
///     .duration_seconds(60.0)
///     .build();
/// let hash = request_hash(&request).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn request_hash(request: &SynthesisRequest) -> SpecResult<String> {
    let spec = request.spec.collapse();
    let carrier_hz = if spec.uses_carrier() {
        request.carrier_hz
    } else {
        DEFAULT_CARRIER_HZ
    };
    let normalized = SynthesisRequest {
        spec,
        carrier_hz,
        ..request.clone()
    };
    canonical_hash(&normalized)
}

/// Computes the BLAKE3 hash of any serializable value's canonical JSON.
pub fn canonical_hash<T: Serialize>(value: &T) -> SpecResult<String> {
    let canonical = canonical_json(value)?;
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

/// Serializes a value to canonical JSON.
///
/// Routing through `serde_json::Value` sorts object keys, since its map type
/// is ordered; `to_string` emits no whitespace.
pub fn canonical_json<T: Serialize>(value: &T) -> SpecResult<String> {
    let value = serde_json::to_value(value)?;
    Ok(serde_json::to_string(&value)?)
}
