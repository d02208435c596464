#![no_main]

use libfuzzer_sys::fuzz_target;
use subjectgen_syntax::parse_type;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(ty) = parse_type(s) {
            // Canonical text must parse back to the same type
            let rendered = ty.to_string();
            assert_eq!(parse_type(&rendered).ok(), Some(ty));
        }
    }
});
