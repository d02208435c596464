#![no_main]

use libfuzzer_sys::fuzz_target;
use subjectgen::model::Manifest;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that validates must also generate
        if let Ok(manifest) = Manifest::from_json(s) {
            if let Ok(subjects) = manifest.subjects() {
                let _ = subjectgen::generate_all(&subjects, manifest.config());
            }
        }
    }
});
