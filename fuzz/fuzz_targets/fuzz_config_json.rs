#![no_main]

use libfuzzer_sys::fuzz_target;
use sitefeedback::config::SiteConfig;

fuzz_target!(|data: &[u8]| {
    // Parsed timings must convert without panicking, negative values included
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<SiteConfig>(s) {
            let _ = config.timings.auto_dismiss();
            let _ = config.timings.search_debounce();
            let _ = config.timings.scroll_throttle();
        }
    }
});
