//! Frame encoding
//!
//! The sensor side of the wire format, used to produce test vectors and
//! synthetic streams. The format has no escaping: a pressure octet equal to
//! the marker would re-frame mid-packet on decode, so encoding refuses it.

use crate::constants::COUNTER_MAX;
use crate::error::TelemetryError;
use bytes::{BufMut, Bytes, BytesMut};

/// Encode one reading as a wire frame: `[marker, counter, hi, lo]`.
pub fn encode_reading(counter: u8, raw: u16, marker: u8) -> Result<[u8; 4], TelemetryError> {
    if counter > COUNTER_MAX {
        return Err(TelemetryError::CounterOutOfRange(counter, COUNTER_MAX));
    }
    let [hi, lo] = raw.to_be_bytes();
    if hi == marker || lo == marker {
        return Err(TelemetryError::UnframablePressure(raw));
    }
    Ok([marker, counter, hi, lo])
}

/// Encode a batch of `(counter, raw pressure)` readings into one contiguous
/// octet stream.
pub fn encode_stream(readings: &[(u8, u16)], marker: u8) -> Result<Bytes, TelemetryError> {
    let mut buf = BytesMut::with_capacity(readings.len() * 4);
    for &(counter, raw) in readings {
        buf.put_slice(&encode_reading(counter, raw, marker)?);
    }
    Ok(buf.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SYNC_MARKER;

    #[test]
    fn test_encode_reading_layout() {
        let frame = encode_reading(0x01, 0x0039, SYNC_MARKER).unwrap();
        assert_eq!(frame, [0x80, 0x01, 0x00, 0x39]);
    }

    #[test]
    fn test_encode_rejects_out_of_range_counter() {
        let err = encode_reading(0x80, 0x0039, SYNC_MARKER).unwrap_err();
        assert_eq!(err, TelemetryError::CounterOutOfRange(0x80, 0x7F));
    }

    #[test]
    fn test_encode_rejects_marker_valued_pressure_octet() {
        assert_eq!(
            encode_reading(0x01, 0x8000, SYNC_MARKER).unwrap_err(),
            TelemetryError::UnframablePressure(0x8000)
        );
        assert_eq!(
            encode_reading(0x01, 0x0080, SYNC_MARKER).unwrap_err(),
            TelemetryError::UnframablePressure(0x0080)
        );
    }

    #[test]
    fn test_encode_stream_concatenates() {
        let stream = encode_stream(&[(0x01, 0x0039), (0x02, 0x003a)], SYNC_MARKER).unwrap();
        assert_eq!(
            stream.as_ref(),
            &[0x80, 0x01, 0x00, 0x39, 0x80, 0x02, 0x00, 0x3a]
        );
    }
}
