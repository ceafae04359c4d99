//! beatgen Spec Library
//!
//! Value types, preset catalog, budgets, validation, and hashing for
//! binaural beat synthesis requests.
//!
//! # Overview
//!
//! A caller picks a preset key, the [`PresetCatalog`] resolves it to a
//! [`FrequencySpec`], and a [`SynthesisRequest`] combines that spec with a
//! duration, carrier, and sample rate. The request is validated against a
//! [`SynthesisBudget`] before any audio is produced.
//!
//! # Example
//!
//! ```
//! use beatgen_spec::{PresetCatalog, SynthesisRequest, FrequencySpec};
//! use beatgen_spec::validation::validate_request;
//! use beatgen_spec::hash::request_hash;
//!
//! let catalog = PresetCatalog::builtin().unwrap();
//! let spec = catalog.resolve("alpha").unwrap();
//! assert_eq!(spec, FrequencySpec::binaural(10.0));
//!
//! let request = SynthesisRequest::builder(spec)
//!     .duration_seconds(1.0)
//!     .carrier_hz(220.0)
//!     .sample_rate(44_100)
//!     .build();
//! assert!(validate_request(&request).is_ok());
//! assert_eq!(request.num_frames(), 44_100);
//! assert_eq!(request_hash(&request).unwrap().len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Preset catalog loading and key resolution
//! - [`error`]: Error types
//! - [`frequency`]: Frequency spec shapes
//! - [`hash`]: Canonical request hashing
//! - [`request`]: Synthesis request and builder
//! - [`validation`]: Budgets and request validation

pub mod catalog;
pub mod error;
pub mod frequency;
pub mod hash;
pub mod request;
pub mod validation;

// Re-export commonly used types at the crate root
pub use catalog::{
    slugify, suggested_filename, FallbackPolicy, PresetCatalog, PresetEntry, PresetInfo,
    Resolution,
};
pub use error::{BackendError, SpecError, SpecResult};
pub use frequency::{FrequencyRange, FrequencySpec};
pub use hash::request_hash;
pub use request::{
    SynthesisRequest, SynthesisRequestBuilder, DEFAULT_CARRIER_HZ, DEFAULT_DURATION_MINUTES,
    DEFAULT_SAMPLE_RATE,
};
pub use validation::{
    validate_request, validate_request_with_budget, BudgetProfile, SynthesisBudget,
};
