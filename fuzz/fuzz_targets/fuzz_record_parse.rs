#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing and verifying arbitrary JSON must never panic.
    if let Ok(record) = serde_json::from_slice::<fairroll_types::RollRecord>(data) {
        let _ = fairroll_verify::verify(&record);
    }
});
