#![no_main]

use libfuzzer_sys::fuzz_target;
use der2text::Oid;

fuzz_target!(|data: &[u8]| {
    if let Ok(oid) = Oid::from_content(data) {
        let text = oid.to_string();
        assert_eq!(text.split('.').count(), oid.arcs().len());
        assert!(oid.arcs().len() >= 2);
    }
    if let Ok(oid) = Oid::from_relative_content(data) {
        assert!(!oid.arcs().is_empty());
        assert!(oid.arcs().len() <= data.len());
    }
});
