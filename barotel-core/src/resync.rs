//! Stream resynchronization for corrupted edges
//!
//! A misaligned or garbage-wrapped stream is trimmed to the window bounded
//! by its first and last sync marker occurrences before framing. The right
//! edge keeps the trailing frame only when a full frame of material follows
//! the last marker; a shorter tail is a truncated packet and is cut at the
//! marker.

use crate::constants::{FRAME_WIDTH, FRAME_WIDTH_HEX};
use crate::error::TelemetryError;
use alloc::format;
use alloc::string::String;

#[cfg(feature = "logging")]
use tracing::debug;

/// Lowercase hex text of a marker octet
pub fn marker_hex(marker: u8) -> String {
    format!("{:02x}", marker)
}

/// Trim hex text to the window bounded by its first and last marker
/// occurrences.
///
/// The search is a plain substring match, deliberately position-free: a
/// marker shifted off the octet grid by upstream truncation still anchors
/// the window. Fails only when the text carries no marker occurrence at
/// all, in which case conversion to octets is impossible. Expects ASCII
/// text; the source adapter rejects anything else before calling in.
pub fn trim_hex(text: &str, marker: u8) -> Result<&str, TelemetryError> {
    let needle = marker_hex(marker);
    let lowered = text.to_ascii_lowercase();

    let start = lowered
        .find(needle.as_str())
        .ok_or(TelemetryError::MalformedInput { len: text.len() })?;
    let stop = lowered.rfind(needle.as_str()).unwrap_or(start);
    let stop = if lowered.len() - stop < FRAME_WIDTH_HEX {
        stop
    } else {
        stop + FRAME_WIDTH_HEX
    };

    #[cfg(feature = "logging")]
    debug!(
        "Trimmed hex window [{}, {}) out of {} chars",
        start,
        stop,
        text.len()
    );

    Ok(&text[start..stop])
}

/// Trim an octet sequence to the window bounded by its first and last
/// markers.
///
/// Byte-form twin of [`trim_hex`] with the same tail rule. A stream with
/// no marker trims to the empty slice; downstream framing then produces
/// nothing worth validating, so this path never errors.
pub fn trim_octets(data: &[u8], marker: u8) -> &[u8] {
    let start = match memchr::memchr(marker, data) {
        Some(start) => start,
        None => return &[],
    };
    let stop = memchr::memrchr(marker, data).unwrap_or(start);
    let stop = if data.len() - stop < FRAME_WIDTH {
        stop
    } else {
        stop + FRAME_WIDTH
    };

    #[cfg(feature = "logging")]
    debug!(
        "Trimmed octet window [{}, {}) out of {} octets",
        start,
        stop,
        data.len()
    );

    &data[start..stop]
}
