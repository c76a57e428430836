//! Numeric decode of validated frames
//!
//! Two decode strategies exist for the same wire format in observed inputs,
//! with no evidence of which is authoritative. Both stay selectable; the
//! scaled-integer form is the canonical default.

use crate::constants::PRESSURE_SCALE;
use crate::types::{DecodeMode, SensorRecord, ValidatedFrame};
use alloc::format;

/// Decode one validated frame into a sensor record.
///
/// `ScaledInteger` is total: the big-endian pressure word divided by 100.
/// `HexDigitConcatenation` reads the hex text of the two pressure octets as
/// the integer and fractional digits of a decimal literal, which has no
/// value when either octet's text carries `a..f`; those frames return
/// `None` and the pipeline drops them as undecodable.
pub fn decode_frame(frame: &ValidatedFrame, mode: DecodeMode) -> Option<SensorRecord> {
    let pressure = match mode {
        DecodeMode::ScaledInteger => f64::from(frame.pressure_raw()) / PRESSURE_SCALE,
        DecodeMode::HexDigitConcatenation => {
            let (hi, lo) = frame.pressure_octets();
            let literal = format!("{:02x}.{:02x}", hi, lo);
            literal.parse::<f64>().ok()?
        }
    };

    Some(SensorRecord {
        identifier: format!("{:02x}", frame.marker()),
        counter: frame.counter(),
        pressure,
    })
}
