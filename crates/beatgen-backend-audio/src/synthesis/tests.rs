//! Tests for stereo synthesis.

use beatgen_spec::{BudgetProfile, FrequencySpec, SpecError, SynthesisBudget, SynthesisRequest};

use super::*;
use crate::buffer::Channel;
use crate::error::AudioError;

fn request(spec: FrequencySpec, seconds: f64) -> SynthesisRequest {
    SynthesisRequest::builder(spec)
        .duration_seconds(seconds)
        .carrier_hz(220.0)
        .sample_rate(44_100)
        .build()
}

// =========================================================================
// Quantization
// =========================================================================

#[test]
fn test_quantize_full_scale() {
    assert_eq!(quantize(0.0), 0);
    assert_eq!(quantize(1.0), 32767);
    assert_eq!(quantize(-1.0), -32767);
}

#[test]
fn test_quantize_rounds_to_nearest() {
    assert_eq!(quantize(0.6 / 32767.0), 1);
    assert_eq!(quantize(-0.6 / 32767.0), -1);
    assert_eq!(quantize(0.4 / 32767.0), 0);
    assert_eq!(quantize(0.5), 16384);
}

#[test]
fn test_quantize_clamps_out_of_range() {
    assert_eq!(quantize(1.5), i16::MAX);
    assert_eq!(quantize(-1.5), i16::MIN);
    assert_eq!(quantize(f64::INFINITY), i16::MAX);
    assert_eq!(quantize(f64::NEG_INFINITY), i16::MIN);
}

#[test]
fn test_quantize_nan_is_silence() {
    assert_eq!(quantize(f64::NAN), 0);
}

// =========================================================================
// Channel plan
// =========================================================================

#[test]
fn test_plan_binaural() {
    let plan = ChannelPlan::new(FrequencySpec::binaural(10.0), 220.0);
    assert_eq!(plan.left_hz, 220.0);
    assert_eq!(plan.right_hz, 230.0);
    assert!(!plan.mirrored);
    assert_eq!(plan.beat_hz(), 10.0);
}

#[test]
fn test_plan_band_collapses_to_mean() {
    let plan = ChannelPlan::new(FrequencySpec::band(8.0, 14.0), 200.0);
    assert_eq!(plan.left_hz, 200.0);
    assert_eq!(plan.right_hz, 211.0);
}

#[test]
fn test_plan_fixed_tone_ignores_carrier() {
    let plan = ChannelPlan::new(FrequencySpec::fixed(432.0), 220.0);
    assert_eq!(plan.left_hz, 432.0);
    assert_eq!(plan.right_hz, 432.0);
    assert!(plan.mirrored);
    assert_eq!(plan.beat_hz(), 0.0);
}

// =========================================================================
// Rendering
// =========================================================================

#[test]
fn test_first_frame_is_silent() {
    let synth = ToneSynth::new(ChannelPlan::new(FrequencySpec::binaural(10.0), 220.0), 44_100);
    assert_eq!(synth.frame_at(0), StereoFrame::new(0, 0));
}

#[test]
fn test_quarter_period_peak() {
    // 441 Hz at 44.1 kHz has a period of 100 frames.
    let synth = ToneSynth::new(ChannelPlan::new(FrequencySpec::fixed(441.0), 0.0), 44_100);
    assert_eq!(synth.frame_at(25).left, 32767);
    assert_eq!(synth.frame_at(75).left, -32767);
}

#[test]
fn test_blocks_match_full_render() {
    let synth = ToneSynth::new(ChannelPlan::new(FrequencySpec::binaural(6.0), 220.0), 22_050);
    let full = synth.render(10_000);

    let mut stitched = Vec::new();
    let mut block = Vec::new();
    let mut start = 0;
    while start < 10_000 {
        let len = 777.min(10_000 - start);
        synth.render_block_into(start, len, &mut block);
        stitched.extend_from_slice(&block);
        start += len;
    }
    assert_eq!(stitched, full.frames());
}

#[test]
fn test_render_block_is_offset_slice() {
    let synth = ToneSynth::new(ChannelPlan::new(FrequencySpec::binaural(40.0), 200.0), 48_000);
    let full = synth.render(2_000);
    assert_eq!(synth.render_block(1_500, 500), &full.frames()[1_500..]);
}

#[test]
fn test_render_zero_frames() {
    let synth = ToneSynth::new(ChannelPlan::new(FrequencySpec::binaural(6.0), 220.0), 44_100);
    assert!(synth.render(0).is_empty());
}

// =========================================================================
// synthesize
// =========================================================================

#[test]
fn test_synthesize_frame_count() {
    let buffer = synthesize(&request(FrequencySpec::binaural(10.0), 1.0)).unwrap();
    assert_eq!(buffer.len(), 44_100);

    let buffer = synthesize(&request(FrequencySpec::binaural(10.0), 1.5)).unwrap();
    assert_eq!(buffer.len(), 66_150);
}

#[test]
fn test_synthesize_fixed_tone_channels_identical() {
    let buffer = synthesize(&request(FrequencySpec::fixed(300.0), 1.0)).unwrap();
    assert!(buffer.frames().iter().all(|f| f.left == f.right));
}

#[test]
fn test_synthesize_binaural_channels_differ() {
    let buffer = synthesize(&request(FrequencySpec::binaural(10.0), 1.0)).unwrap();
    let left: Vec<i16> = buffer.channel(Channel::Left).collect();
    let right: Vec<i16> = buffer.channel(Channel::Right).collect();
    assert_ne!(left, right);
}

#[test]
fn test_synthesize_is_deterministic() {
    let req = request(FrequencySpec::band(4.0, 8.0), 2.0);
    assert_eq!(synthesize(&req).unwrap(), synthesize(&req).unwrap());
}

#[test]
fn test_synthesize_peak_near_full_scale() {
    let buffer = synthesize(&request(FrequencySpec::binaural(10.0), 1.0)).unwrap();
    assert!(buffer.peak() >= 32_700);
    assert!(buffer.peak() <= 32_767);
}

#[test]
fn test_synthesize_rejects_invalid_request() {
    let err = synthesize(&request(FrequencySpec::binaural(10.0), 0.0)).unwrap_err();
    assert!(matches!(
        err,
        AudioError::Spec(SpecError::InvalidParameter { .. })
    ));

    let err = synthesize(&request(FrequencySpec::binaural(-1.0), 1.0)).unwrap_err();
    assert!(matches!(
        err,
        AudioError::Spec(SpecError::InvalidParameter { .. })
    ));
}

#[test]
fn test_synthesize_rejects_over_budget() {
    let err = synthesize(&request(FrequencySpec::binaural(10.0), 7201.0)).unwrap_err();
    assert!(matches!(
        err,
        AudioError::Spec(SpecError::DurationTooLarge { .. })
    ));
}

#[test]
fn test_synthesize_with_preview_budget() {
    let preview = BudgetProfile::preview().synthesis;
    let buffer =
        synthesize_with_budget(&request(FrequencySpec::binaural(10.0), 0.25), &preview).unwrap();
    assert_eq!(buffer.len(), 11_025);

    assert!(synthesize_with_budget(
        &request(FrequencySpec::binaural(10.0), 0.25),
        &SynthesisBudget::default()
    )
    .is_err());
}
