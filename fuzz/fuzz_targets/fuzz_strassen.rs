#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use strassen_core::naive::naive_multiply;
use strassen_core::{
    CancellationToken, Matrix, Multiplier, Options, OverflowPolicy, StrassenEngine,
    ValidatedMultiplier,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Order from {1, 2, 4, 8, 16}, thresholds from the next two bytes
    let n = 1usize << (data[0] % 5);
    let opts = Options {
        parallel_threshold: usize::from(data[1] % 17),
        leaf_order: usize::from(data[2] % 17),
        ..Options::default()
    }
    .normalize();

    let mut bytes = data[3..].chunks(8).cycle();
    let mut next = || {
        let mut buf = [0u8; 8];
        if let Some(chunk) = bytes.next() {
            buf[..chunk.len()].copy_from_slice(chunk);
        }
        i64::from_le_bytes(buf)
    };
    let a = Matrix::from_fn(n, |_, _| next());
    let b = Matrix::from_fn(n, |_, _| next());

    let strassen = ValidatedMultiplier::new(Arc::new(StrassenEngine::new()));
    let product = strassen
        .multiply(&CancellationToken::new(), &a, &b, &opts)
        .unwrap();
    let expected = naive_multiply(&a, &b, OverflowPolicy::Wrapping).unwrap();
    assert_eq!(product, expected);
});
