//! Fuzzing entry points for the barotel-core decode pipeline
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode

use barotel_core::{decode_hex_stream, decode_octet_stream, DecodeConfig, DecodeMode};

pub fn fuzz_decode_octets(data: &[u8]) {
    // Try to decode - should never panic
    let _ = decode_octet_stream(data, &DecodeConfig::default());

    let trimmed = DecodeConfig {
        trim: true,
        mode: DecodeMode::HexDigitConcatenation,
        ..Default::default()
    };
    let _ = decode_octet_stream(data, &trimmed);
}

pub fn fuzz_decode_hex(data: &[u8]) {
    // Any byte soup, hex or not - should never panic
    if let Ok(text) = core::str::from_utf8(data) {
        let _ = decode_hex_stream(text, &DecodeConfig::default());
    }
}
