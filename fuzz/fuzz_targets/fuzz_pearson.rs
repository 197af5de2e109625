#![no_main]

use libfuzzer_sys::fuzz_target;

use corrlab_core::metric::pearson;

fuzz_target!(|data: &[u8]| {
    // Pairs of little-endian f64 values: 16 bytes per (x, y) sample
    let (x, y): (Vec<f64>, Vec<f64>) = data
        .chunks_exact(16)
        .map(|chunk| {
            let mut xb = [0u8; 8];
            let mut yb = [0u8; 8];
            xb.copy_from_slice(&chunk[..8]);
            yb.copy_from_slice(&chunk[8..]);
            (f64::from_le_bytes(xb), f64::from_le_bytes(yb))
        })
        .unzip();

    // Either a typed error or a coefficient in [-1, 1]
    if let Ok(r) = pearson(&x, &y) {
        assert!(r.is_finite());
        assert!((-1.0..=1.0).contains(&r), "r = {r}");
    }
});
