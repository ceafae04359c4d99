//! Common validation utilities.

use crate::error::{SpecError, SpecResult};

/// Validate that a value is finite and strictly positive.
///
/// # Example
/// ```
/// use beatgen_spec::validation::validate_positive;
///
/// assert!(validate_positive("carrier_hz", 220.0).is_ok());
/// assert!(validate_positive("carrier_hz", 0.0).is_err());
/// assert!(validate_positive("carrier_hz", f64::INFINITY).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> SpecResult<()> {
    if !value.is_finite() {
        return Err(SpecError::invalid_param(name, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(SpecError::invalid_param(
            name,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

/// Validate that `frequency_hz` is strictly below the Nyquist limit.
///
/// A tone at or above half the sample rate aliases and no longer carries the
/// requested frequency.
pub fn validate_below_nyquist(name: &str, frequency_hz: f64, sample_rate: u32) -> SpecResult<()> {
    let nyquist = sample_rate as f64 / 2.0;
    if frequency_hz >= nyquist {
        return Err(SpecError::invalid_param(
            name,
            format!(
                "{} Hz is at or above the Nyquist frequency ({} Hz) for sample rate {}",
                frequency_hz, nyquist, sample_rate
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("x", 1e-9).is_ok());
        assert!(validate_positive("x", -0.0).is_err());
        assert!(validate_positive("x", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_below_nyquist() {
        assert!(validate_below_nyquist("right_hz", 230.0, 44_100).is_ok());
        assert!(validate_below_nyquist("right_hz", 22_049.9, 44_100).is_ok());
        let err = validate_below_nyquist("right_hz", 22_050.0, 44_100).unwrap_err();
        assert!(err.to_string().contains("Nyquist"));
    }
}
