#![no_main]

use libfuzzer_sys::fuzz_target;
use sitefeedback::signup::{EmailAddress, is_valid_email};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // A parsed address is trimmed, whitespace-free and passes the raw check
        if let Ok(email) = EmailAddress::parse(s) {
            assert_eq!(email.as_str(), email.as_str().trim());
            assert!(is_valid_email(email.as_str()));
            assert!(!email.as_str().chars().any(char::is_whitespace));
        }
    }
});
