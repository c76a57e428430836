//! Octet source adapter for hex-encoded input
//!
//! Normalizes the textual transport encoding into raw octets. Performs no
//! semantic validation; framing and validation happen downstream.

use crate::error::TelemetryError;
use crate::resync;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::warn;

/// Convert a hex-encoded stream into octets.
///
/// Even-length text converts directly, lowercase or mixed case. Odd length
/// signals edge corruption: the text is first trimmed to its marker-bounded
/// window ([`resync::trim_hex`]) and converted from there. Fails with
/// [`TelemetryError::MalformedInput`] when an odd-length input carries no
/// marker occurrence, and with [`TelemetryError::InvalidHex`] when the text
/// cannot convert to whole octets even after repair.
pub fn octets_from_hex(text: &str, marker: u8) -> Result<Vec<u8>, TelemetryError> {
    if !text.is_ascii() {
        return Err(TelemetryError::InvalidHex(String::from(
            "non-ascii character in input",
        )));
    }
    if text.len() % 2 == 0 {
        return Ok(hex::decode(text)?);
    }

    #[cfg(feature = "logging")]
    warn!(
        "Odd-length hex input ({} chars), repairing edges",
        text.len()
    );

    let window = resync::trim_hex(text, marker)?;
    Ok(hex::decode(window)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SYNC_MARKER;

    #[test]
    fn test_even_input_converts_directly() {
        let octets = octets_from_hex("80010039", SYNC_MARKER).unwrap();
        assert_eq!(octets, vec![0x80, 0x01, 0x00, 0x39]);
    }

    #[test]
    fn test_mixed_case_converts() {
        let octets = octets_from_hex("80010A3F", SYNC_MARKER).unwrap();
        assert_eq!(octets, vec![0x80, 0x01, 0x0a, 0x3f]);
    }

    #[test]
    fn test_empty_input_is_no_octets() {
        assert_eq!(octets_from_hex("", SYNC_MARKER).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_odd_input_repairs_to_window() {
        // Garbage before the first marker and a truncated trailing packet.
        let octets = octets_from_hex("f8001003980", SYNC_MARKER).unwrap();
        assert_eq!(octets, vec![0x80, 0x01, 0x00, 0x39]);
    }

    #[test]
    fn test_odd_input_without_marker_is_malformed() {
        let err = octets_from_hex("deadbeef0", SYNC_MARKER).unwrap_err();
        assert!(matches!(err, TelemetryError::MalformedInput { len: 9 }));
    }

    #[test]
    fn test_non_hex_character_is_invalid() {
        let err = octets_from_hex("80zz", SYNC_MARKER).unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidHex(_)));
    }
}
