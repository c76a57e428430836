//! Integration tests for the complete adapt → resync → frame → validate →
//! decode → persist flow, pinned against streams observed from the sensor.

use barotel_core::{
    decode_hex_stream, decode_hex_to_sink, decode_octet_stream, encoder::encode_stream,
    DecodeConfig, DecodeMode, MemorySink, TelemetryError,
};

/// A captured even-length stream with garbage at both edges and one frame
/// carrying a corrupted marker octet in the middle.
const EDGE_GARBAGE_STREAM: &str = "34ffffff80490000804a0000804b0000824c0000804d000079f3ffff";

#[test]
fn test_edge_garbage_stream_recovers_valid_frames() {
    let report = decode_hex_stream(EDGE_GARBAGE_STREAM, &DecodeConfig::default()).unwrap();

    let counters: Vec<u8> = report.records.iter().map(|r| r.counter).collect();
    assert_eq!(counters, vec![0x49, 0x4a, 0x4b, 0x4d]);
    for record in &report.records {
        assert_eq!(record.identifier, "80");
        assert_eq!(record.pressure, 0.0);
    }
    // The 0x82-marked frame and both garbage fragments were absorbed.
    assert_eq!(report.stats.accepted, 4);
    assert!(report.stats.rejected >= 3);
}

/// Rebuild the captured odd-length stream: a partial leading packet, 128
/// wrap-around counter frames, and a trailing packet truncated mid-octet.
fn wraparound_stream_with_truncated_tail() -> String {
    let mut text = String::from("807b");
    for counter in (0x38..=0x7fu8).chain(0x00..=0x37) {
        text.push_str(&format!("80{:02x}0000", counter));
    }
    // Cut the final frame to five characters: marker, counter, half an octet.
    text.truncate(text.len() - 3);
    assert_eq!(text.len() % 2, 1);
    text
}

#[test]
fn test_odd_length_stream_repairs_and_decodes() {
    let text = wraparound_stream_with_truncated_tail();
    let report = decode_hex_stream(&text, &DecodeConfig::default()).unwrap();

    // The truncated trailing packet (counter 0x37) is cut by the repair
    // window; the partial leading packet fails validation.
    assert_eq!(report.records.len(), 127);
    assert_eq!(report.records[0].counter, 0x38);
    assert_eq!(report.records.last().unwrap().counter, 0x36);
    assert_eq!(report.stats.accepted, 127);
    assert_eq!(report.stats.rejected, 2);
}

#[test]
fn test_hex_and_octet_paths_agree_on_even_input() {
    let octets = hex::decode(EDGE_GARBAGE_STREAM).unwrap();
    let config = DecodeConfig::default();

    let from_hex = decode_hex_stream(EDGE_GARBAGE_STREAM, &config).unwrap();
    let from_octets = decode_octet_stream(&octets, &config);

    assert_eq!(from_hex.records, from_octets.records);
    assert_eq!(from_hex.stats, from_octets.stats);
}

#[test]
fn test_encode_decode_round_trip_preserves_order() {
    let readings: Vec<(u8, u16)> = (0u8..20).map(|i| (i, u16::from(i) * 3 + 7)).collect();
    let stream = encode_stream(&readings, 0x80).unwrap();

    let report = decode_octet_stream(&stream, &DecodeConfig::default());

    assert_eq!(report.records.len(), readings.len());
    for (record, (counter, raw)) in report.records.iter().zip(&readings) {
        assert_eq!(record.counter, *counter);
        assert!((record.pressure - f64::from(*raw) / 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_decode_with_configured_marker() {
    let stream = encode_stream(&[(1, 57), (2, 58)], 0x42).unwrap();
    let config = DecodeConfig {
        marker: 0x42,
        ..Default::default()
    };

    let report = decode_octet_stream(&stream, &config);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].identifier, "42");

    // The default marker finds nothing in the same stream.
    let report = decode_octet_stream(&stream, &DecodeConfig::default());
    assert!(report.records.is_empty());
}

#[test]
fn test_legacy_mode_end_to_end() {
    let config = DecodeConfig {
        mode: DecodeMode::HexDigitConcatenation,
        ..Default::default()
    };
    // "12"."34" reads as 12.34 in legacy mode, 4660/100 canonically.
    let report = decode_hex_stream("80051234", &config).unwrap();
    assert_eq!(report.records.len(), 1);
    assert!((report.records[0].pressure - 12.34).abs() < 1e-9);
}

#[test]
fn test_persist_hands_one_ordered_batch_to_the_sink() {
    let mut sink = MemorySink::new();
    let report =
        decode_hex_to_sink(EDGE_GARBAGE_STREAM, &DecodeConfig::default(), &mut sink).unwrap();

    assert_eq!(sink.batches().len(), 1);
    assert_eq!(sink.batches()[0], report.records);
}

#[test]
fn test_malformed_input_produces_no_partial_output() {
    let mut sink = MemorySink::new();
    let err = decode_hex_to_sink("deadbeef0", &DecodeConfig::default(), &mut sink).unwrap_err();

    assert!(matches!(err, TelemetryError::MalformedInput { .. }));
    assert!(sink.is_empty());
}
