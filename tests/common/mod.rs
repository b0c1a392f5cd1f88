#![allow(dead_code)]

// Route `tracing` events (through their `log` records) to the test output.
pub fn setup_if_needed() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Asserts that a value serializes to `$json` and decodes back to itself.
macro_rules! assert_json_roundtrip {
    ($ty:ty: $value:expr => $json:expr) => {{
        let value: $ty = $value;
        let encoded = value.to_json().expect("failed to encode");

        assert_eq!(std::str::from_utf8(&encoded).unwrap(), $json);
        assert_eq!(<$ty>::from_json(&encoded).expect("failed to decode"), value);
    }};
}
