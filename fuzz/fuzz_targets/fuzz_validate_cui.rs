#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — invalid results are fine, panics are bugs.
        let result = cuival::validator::validate_cui(s);
        assert_eq!(result.valid, result.normalized.is_some());
        assert_eq!(result.valid, result.error.is_none());
    }
});
