//! Library-level tests for the CLI commands.

use beatgen_backend_audio::decode_wav;
use beatgen_cli::commands::analyze::analyze_file;
use beatgen_cli::commands::generate::{execute, GenerateOptions};
use beatgen_cli::commands::json_output::{error_codes, EXIT_REQUEST_ERROR};
use beatgen_cli::commands::presets::collect;
use beatgen_spec::FrequencySpec;
use tempfile::tempdir;

fn options(dir: &std::path::Path, preset: &str, seconds: f64) -> GenerateOptions {
    GenerateOptions {
        preset: Some(preset.to_string()),
        seconds: Some(seconds),
        output: Some(dir.join("out.wav").display().to_string()),
        ..GenerateOptions::default()
    }
}

#[test]
fn test_generate_writes_wav() {
    let dir = tempdir().unwrap();
    let (result, warnings) = execute(&options(dir.path(), "alpha", 1.0)).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(result.resolved_key, "alpha");
    assert_eq!(result.spec, FrequencySpec::binaural(10.0));
    assert_eq!(result.left_hz, 220.0);
    assert_eq!(result.right_hz, 230.0);
    assert_eq!(result.num_frames, 44_100);
    assert_eq!(result.size_bytes, 176_444);
    assert_eq!(result.catalog, "built-in");

    let bytes = std::fs::read(&result.output).unwrap();
    assert_eq!(bytes.len() as u64, result.size_bytes);
    assert_eq!(decode_wav(&bytes).unwrap().buffer.len(), 44_100);
}

#[test]
fn test_stream_and_memory_outputs_match() {
    let dir = tempdir().unwrap();
    let in_memory = execute(&options(dir.path(), "theta", 2.0)).unwrap().0;
    let first = std::fs::read(&in_memory.output).unwrap();

    let streamed = execute(&GenerateOptions {
        stream: true,
        output: Some(dir.path().join("streamed.wav").display().to_string()),
        ..options(dir.path(), "theta", 2.0)
    })
    .unwrap()
    .0;
    let second = std::fs::read(&streamed.output).unwrap();

    assert!(streamed.streamed);
    assert_eq!(first, second);
    assert_eq!(in_memory.pcm_hash, streamed.pcm_hash);
    assert_eq!(in_memory.request_hash, streamed.request_hash);
}

#[test]
fn test_generate_resolves_purpose_slug() {
    let dir = tempdir().unwrap();
    let (result, _) = execute(&options(dir.path(), "deep-sleep-healing", 1.0)).unwrap();
    assert_eq!(result.requested_key, "deep-sleep-healing");
    assert_eq!(result.resolved_key, "Deep Sleep & Healing");
    assert_eq!(result.right_hz - result.left_hz, 2.0);
}

#[test]
fn test_unknown_preset_fails_without_fallback() {
    let dir = tempdir().unwrap();
    let failure = execute(&options(dir.path(), "Lucid Dreaming", 1.0)).unwrap_err();
    assert_eq!(failure.code, "SPEC_001");
    assert_eq!(failure.exit, EXIT_REQUEST_ERROR);
    assert!(!dir.path().join("out.wav").exists());
}

#[test]
fn test_unknown_preset_with_fallback_warns() {
    let dir = tempdir().unwrap();
    let (result, warnings) = execute(&GenerateOptions {
        fallback: Some("Relaxation & Stress Relief".to_string()),
        ..options(dir.path(), "Lucid Dreaming", 1.0)
    })
    .unwrap();

    assert!(result.fell_back);
    assert_eq!(result.resolved_key, "Relaxation & Stress Relief");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, "CLI_W001");
}

#[test]
fn test_over_budget_writes_nothing() {
    let dir = tempdir().unwrap();
    let failure = execute(&GenerateOptions {
        budget: Some("preview".to_string()),
        stream: true,
        ..options(dir.path(), "alpha", 31.0)
    })
    .unwrap_err();
    assert_eq!(failure.code, "SPEC_003");
    assert!(!dir.path().join("out.wav").exists());
}

#[test]
fn test_unknown_budget() {
    let dir = tempdir().unwrap();
    let failure = execute(&GenerateOptions {
        budget: Some("forever".to_string()),
        ..options(dir.path(), "alpha", 1.0)
    })
    .unwrap_err();
    assert_eq!(failure.code, error_codes::UNKNOWN_BUDGET);
}

#[test]
fn test_presets_from_custom_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("presets.json");
    std::fs::write(
        &path,
        r#"{
            "default": "calm",
            "presets": {
                "schumann": {
                    "spec": { "type": "binaural_beat", "beat_hz": 7.83 },
                    "range": { "low_hz": 7.0, "high_hz": 8.5 }
                },
                "calm": { "alias": "schumann", "description": "Earth resonance" }
            }
        }"#,
    )
    .unwrap();

    let result = collect(path.to_str()).unwrap();
    assert_eq!(result.default_key.as_deref(), Some("calm"));
    assert_eq!(result.presets.len(), 2);

    let calm = &result.presets[0];
    assert_eq!(calm.key, "calm");
    assert_eq!(calm.alias.as_deref(), Some("schumann"));
    assert_eq!(calm.spec, FrequencySpec::binaural(7.83));
    assert_eq!(calm.range_low_hz, Some(7.0));
    assert_eq!(calm.filename, "calm_beat.wav");
}

#[test]
fn test_presets_rejects_cyclic_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("presets.json");
    std::fs::write(
        &path,
        r#"{"presets": {"a": {"alias": "b"}, "b": {"alias": "a"}}}"#,
    )
    .unwrap();

    let failure = collect(path.to_str()).unwrap_err();
    assert_eq!(failure.code, "SPEC_004");
}

#[test]
fn test_analyze_generated_file() {
    let dir = tempdir().unwrap();
    let (result, _) = execute(&options(dir.path(), "beta", 2.0)).unwrap();

    let analysis = analyze_file(&result.output).unwrap();
    let resolution = analysis.resolution_hz.unwrap();
    assert_eq!(analysis.pcm_hash, result.pcm_hash);
    assert!((analysis.beat_hz.unwrap() - 18.0).abs() <= 2.0 * resolution);
}

#[test]
fn test_analyze_missing_and_invalid_files() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.wav");
    let failure = analyze_file(missing.to_str().unwrap()).unwrap_err();
    assert_eq!(failure.code, error_codes::FILE_READ);

    let junk = dir.path().join("junk.wav");
    std::fs::write(&junk, b"definitely not RIFF").unwrap();
    let failure = analyze_file(junk.to_str().unwrap()).unwrap_err();
    assert_eq!(failure.code, "AUDIO_002");
    assert_eq!(failure.exit, EXIT_REQUEST_ERROR);
}
