#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(text) {
            let _ = hostaway_occupancy::adapters::hostaway::parser::parse_reservations_response(
                &json,
            );
        }
    }
});
