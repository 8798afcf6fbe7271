#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the run-length decoder.
///
/// Arbitrary input must either decode or return a format error, and the
/// expansion limit must hold for every accepted input.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(decoded) = text_tools::codec::run_length_decode_with_limit(s, 4096) {
            assert!(decoded.chars().count() <= 4096);
        }
    }
});
