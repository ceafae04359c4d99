#![no_main]

use beatgen_backend_audio::{decode_wav, encode_wav};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = beatgen_backend_audio::wav::extract_pcm_data(data);

    // Anything that decodes must re-encode to a file that decodes identically.
    if let Ok(decoded) = decode_wav(data) {
        let encoded = encode_wav(&decoded.buffer, decoded.format.sample_rate)
            .expect("decoded buffer must re-encode");
        let again = decode_wav(encoded.as_bytes()).expect("re-encoded file must decode");
        assert_eq!(again, decoded);
    }
});
