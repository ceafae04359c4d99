//! Tests for request validation.

use super::*;
use crate::frequency::FrequencySpec;

fn alpha_request(duration_seconds: f64) -> SynthesisRequest {
    SynthesisRequest::builder(FrequencySpec::binaural(10.0))
        .duration_seconds(duration_seconds)
        .carrier_hz(220.0)
        .sample_rate(44_100)
        .build()
}

// =========================================================================
// Duration bounds
// =========================================================================

#[test]
fn test_minimum_duration_accepted() {
    assert!(validate_request(&alpha_request(1.0)).is_ok());
}

#[test]
fn test_maximum_duration_accepted() {
    assert!(validate_request(&alpha_request(7200.0)).is_ok());
}

#[test]
fn test_below_minimum_rejected() {
    let err = validate_request(&alpha_request(0.999)).unwrap_err();
    assert!(matches!(
        err,
        SpecError::InvalidParameter { ref name, .. } if name == "duration_seconds"
    ));
}

#[test]
fn test_above_maximum_rejected() {
    let err = validate_request(&alpha_request(7201.0)).unwrap_err();
    match err {
        SpecError::DurationTooLarge {
            duration_seconds,
            max_seconds,
        } => {
            assert_eq!(duration_seconds, 7201.0);
            assert_eq!(max_seconds, 7200.0);
        }
        other => panic!("expected DurationTooLarge, got {:?}", other),
    }
}

#[test]
fn test_non_positive_duration_rejected() {
    for duration in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = validate_request(&alpha_request(duration)).unwrap_err();
        assert!(
            matches!(err, SpecError::InvalidParameter { .. }),
            "duration {} should be an invalid parameter, got {:?}",
            duration,
            err
        );
    }
}

#[test]
fn test_short_profile_ceiling() {
    let budget = BudgetProfile::short().synthesis;
    assert!(validate_request_with_budget(&alpha_request(3600.0), &budget).is_ok());
    assert!(matches!(
        validate_request_with_budget(&alpha_request(3601.0), &budget),
        Err(SpecError::DurationTooLarge { .. })
    ));
}

#[test]
fn test_frame_cap_enforced() {
    let budget = SynthesisBudget {
        max_frames: 44_100,
        ..SynthesisBudget::default()
    };
    assert!(validate_request_with_budget(&alpha_request(1.0), &budget).is_ok());
    assert!(matches!(
        validate_request_with_budget(&alpha_request(2.0), &budget),
        Err(SpecError::DurationTooLarge { .. })
    ));
}

// =========================================================================
// Frequencies and sample rate
// =========================================================================

#[test]
fn test_zero_sample_rate_rejected() {
    let mut request = alpha_request(10.0);
    request.sample_rate = 0;
    let err = validate_request(&request).unwrap_err();
    assert!(err.to_string().contains("sample_rate"));
}

#[test]
fn test_disallowed_sample_rate_rejected() {
    let mut request = alpha_request(10.0);
    request.sample_rate = 8_000;
    assert!(validate_request(&request).is_err());
}

#[test]
fn test_non_positive_carrier_rejected() {
    let mut request = alpha_request(10.0);
    request.carrier_hz = 0.0;
    let err = validate_request(&request).unwrap_err();
    assert!(err.to_string().contains("carrier_hz"));
}

#[test]
fn test_fixed_tone_ignores_carrier() {
    let request = SynthesisRequest::builder(FrequencySpec::fixed(432.0))
        .duration_seconds(5.0)
        .carrier_hz(-1.0)
        .build();
    assert!(validate_request(&request).is_ok());
}

#[test]
fn test_invalid_spec_rejected() {
    let request = SynthesisRequest::builder(FrequencySpec::band(14.0, 8.0))
        .duration_seconds(5.0)
        .build();
    assert!(validate_request(&request).is_err());
}

#[test]
fn test_right_channel_above_nyquist_rejected() {
    let request = SynthesisRequest::builder(FrequencySpec::binaural(40.0))
        .duration_seconds(5.0)
        .carrier_hz(11_000.0)
        .sample_rate(22_050)
        .build();
    let err = validate_request(&request).unwrap_err();
    assert!(err.to_string().contains("right_hz"));
}
