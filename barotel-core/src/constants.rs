//! Constants and limits for the pressure telemetry wire format

/// Sync marker octet - identifies the start of a packet and anchors
/// resynchronization of a corrupted stream
pub const SYNC_MARKER: u8 = 0x80;

/// Textual (hex) form of the default sync marker
pub const SYNC_MARKER_HEX: &str = "80";

/// Fixed packet width in octets: marker + counter + two pressure octets
pub const FRAME_WIDTH: usize = 4;

/// Fixed packet width in hex characters
pub const FRAME_WIDTH_HEX: usize = FRAME_WIDTH * 2;

/// Highest sequence counter a frame may carry
pub const COUNTER_MAX: u8 = 0x7F;

/// Divisor applied to the raw 16-bit pressure word in the canonical decode
pub const PRESSURE_SCALE: f64 = 100.0;
