#![no_main]

use libfuzzer_sys::fuzz_target;

use corrlab_core::params::ParamId;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let id = ParamId::ALL[usize::from(data[0]) % ParamId::ALL.len()];
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[1..9]);
    let value = f64::from_le_bytes(bytes);
    if !value.is_finite() {
        return;
    }

    let spec = id.spec();
    let snapped = spec.snap(value);
    assert!(spec.contains(snapped), "{snapped} outside {}", spec.name);
    assert!(spec.is_on_grid(snapped), "{snapped} off grid for {}", spec.name);
    assert!(spec.validate(snapped).is_ok());
});
