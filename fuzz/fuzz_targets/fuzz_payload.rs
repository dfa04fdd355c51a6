#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_lib::payload::{decode, encode};

fuzz_target!(|data: &[u8]| {
    // Should not panic; whatever decodes must encode and decode back unchanged
    if let Ok((a, b)) = decode(data) {
        let body = encode(&a, &b).unwrap();
        assert_eq!(decode(body.as_bytes()).unwrap(), (a, b));
    }
});
