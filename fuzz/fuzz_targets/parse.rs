#![no_main]

use libfuzzer_sys::fuzz_target;
use der2text::{Decoder, Options, Output};

fn render(decoder: &Decoder, data: &[u8]) -> (Vec<u8>, bool) {
    let mut out = Output::new();
    let ok = decoder.parse(&mut out.indenter(), data).is_ok();
    (out.into_bytes().to_vec(), ok)
}

fuzz_target!(|data: &[u8]| {
    let decoder = Decoder::default();
    let first = render(&decoder, data);
    assert_eq!(first, render(&decoder, data));

    // Hints and names only ever add comment lines.
    let plain = Decoder::new(
        Options::default().with_hints(false).with_oid_names(false)
    );
    let (text, ok) = render(&plain, data);
    assert_eq!(ok, first.1);
    assert!(text.len() <= first.0.len());
});
