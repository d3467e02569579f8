#![no_main]

use libfuzzer_sys::fuzz_target;
use pageweave::component::asciinema::CastOptions;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string, ignoring invalid UTF-8
    if let Ok(yaml_str) = std::str::from_utf8(data) {
        // Attempt to parse the options record
        // We don't care about the result, just that it doesn't panic
        let _ = CastOptions::from_yaml_str(yaml_str);
    }
});
