#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(value) = routeload::fuzzing::parse_request_count_input(input) {
            debug_assert!(value >= 1);
            debug_assert_eq!(input.trim().parse::<u64>().ok(), Some(value));
        }
        if let Ok(duration) = routeload::fuzzing::parse_duration_input(input) {
            debug_assert!(duration.as_millis() > 0);
        }
    }
});
