#![no_main]

use libfuzzer_sys::fuzz_target;
use trustgate_types::{Email, Permission, PhoneNumber};

fuzz_target!(|data: &[u8]| {
    // Parsers must never panic, and `parse` must agree with `is_valid`.
    if let Ok(s) = std::str::from_utf8(data) {
        assert_eq!(Email::parse(s).is_ok(), Email::is_valid(s));
        assert_eq!(PhoneNumber::parse(s).is_ok(), PhoneNumber::is_valid(s));
        if let Ok(p) = s.parse::<Permission>() {
            assert_eq!(p.as_str(), s);
        }
    }
});
