#![no_main]

use libfuzzer_sys::fuzz_target;

// Split the input in two: first half schema, second half instance. Compile
// and validate must never panic, whatever JSON comes out of the bytes.
fuzz_target!(|data: &[u8]| {
    let mid = data.len() / 2;
    let (schema_bytes, instance_bytes) = data.split_at(mid);

    let Ok(schema) = serde_json::from_slice::<serde_json::Value>(schema_bytes) else {
        return;
    };
    let Ok(instance) = serde_json::from_slice::<serde_json::Value>(instance_bytes) else {
        return;
    };

    let _ = boundcheck_core::check(&schema, &instance);
});
