#![no_main]

use libfuzzer_sys::fuzz_target;
use der2text::string::{BitString, Bmp, CharSet, Escaped, Universal, UtcTime};

fuzz_target!(|data: &[u8]| {
    if let Ok(bits) = BitString::from_content(data) {
        assert!(bits.unused() < 8);
        assert_eq!(bits.octets().len() + 1, data.len());
    }

    // Converted strings are always valid UTF-8.
    if let Ok(text) = Bmp::decode(data) {
        assert!(std::str::from_utf8(&text).is_ok());
    }
    if let Ok(text) = Universal::decode(data) {
        assert!(std::str::from_utf8(&text).is_ok());
    }

    for chunk in Escaped::new(data) {
        assert!(!chunk.contains(&b'\n'));
        assert!(!chunk.contains(&b'\r'));
    }

    let _ = UtcTime::from_content(data);
});
