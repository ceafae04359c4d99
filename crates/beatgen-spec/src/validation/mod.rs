//! Request validation logic.
//!
//! Every check runs before any sample buffer is allocated, so a rejected
//! request costs nothing but the error value.

pub mod budgets;
pub mod common;

#[cfg(test)]
mod tests;

pub use budgets::{BudgetProfile, SynthesisBudget};
pub use common::{validate_below_nyquist, validate_positive};

use crate::error::{SpecError, SpecResult};
use crate::request::SynthesisRequest;

/// Validates a request against the default budget.
///
/// # Example
/// ```
/// use beatgen_spec::{FrequencySpec, SynthesisRequest};
/// use beatgen_spec::validation::validate_request;
///
/// let request = SynthesisRequest::builder(FrequencySpec::binaural(10.0))
///     .duration_seconds(60.0)
///     .build();
/// assert!(validate_request(&request).is_ok());
///
/// let request = SynthesisRequest::builder(FrequencySpec::binaural(10.0))
///     .duration_seconds(0.0)
///     .build();
/// assert!(validate_request(&request).is_err());
/// ```
pub fn validate_request(request: &SynthesisRequest) -> SpecResult<()> {
    validate_request_with_budget(request, &SynthesisBudget::default())
}

/// Validates a request against an explicit budget.
///
/// Checks, in order: sample rate, frequency spec, carrier, channel frequencies
/// against Nyquist, duration domain, duration bounds, frame cap.
pub fn validate_request_with_budget(
    request: &SynthesisRequest,
    budget: &SynthesisBudget,
) -> SpecResult<()> {
    validate_sample_rate(request.sample_rate, budget)?;
    request.spec.validate()?;

    if request.spec.uses_carrier() {
        validate_positive("carrier_hz", request.carrier_hz)?;
    }

    let (left_hz, right_hz) = request.channel_frequencies();
    validate_below_nyquist("left_hz", left_hz, request.sample_rate)?;
    validate_below_nyquist("right_hz", right_hz, request.sample_rate)?;

    validate_duration(request, budget)
}

fn validate_sample_rate(sample_rate: u32, budget: &SynthesisBudget) -> SpecResult<()> {
    if sample_rate == 0 {
        return Err(SpecError::invalid_param(
            "sample_rate",
            "must be greater than zero",
        ));
    }
    if !budget.allows_sample_rate(sample_rate) {
        return Err(SpecError::invalid_param(
            "sample_rate",
            format!(
                "{} Hz is not allowed (expected one of {:?})",
                sample_rate, budget.allowed_sample_rates
            ),
        ));
    }
    Ok(())
}

fn validate_duration(request: &SynthesisRequest, budget: &SynthesisBudget) -> SpecResult<()> {
    let duration = request.duration_seconds;
    validate_positive("duration_seconds", duration)?;

    if duration < budget.min_duration_seconds {
        return Err(SpecError::invalid_param(
            "duration_seconds",
            format!(
                "{} s is below the minimum of {} s",
                duration, budget.min_duration_seconds
            ),
        ));
    }

    if duration > budget.max_duration_seconds {
        return Err(SpecError::DurationTooLarge {
            duration_seconds: duration,
            max_seconds: budget.max_duration_seconds,
        });
    }

    if request.num_frames() > budget.max_frames {
        return Err(SpecError::DurationTooLarge {
            duration_seconds: duration,
            max_seconds: budget.max_frames as f64 / request.sample_rate as f64,
        });
    }

    Ok(())
}
