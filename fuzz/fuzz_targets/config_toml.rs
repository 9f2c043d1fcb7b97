#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(config) = routeload::fuzzing::validate_config_toml(input) {
            if let Some(endpoints) = config.endpoints.as_ref() {
                debug_assert!(!endpoints.is_empty());
            }
        }
    }
});
