//! Error types for telemetry decode operations

use alloc::string::{String, ToString};

/// Errors that can occur while decoding or encoding a telemetry stream
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryError {
    /// Odd-length hex input with no sync marker to anchor repair
    #[cfg_attr(
        feature = "std",
        error("malformed input: odd-length hex ({len} chars) carries no sync marker")
    )]
    MalformedInput {
        /// Length of the rejected input in characters.
        len: usize,
    },

    /// Input contains characters that cannot convert to whole octets
    #[cfg_attr(feature = "std", error("invalid hex input: {0}"))]
    InvalidHex(String),

    /// Sequence counter outside the encodable range
    #[cfg_attr(feature = "std", error("counter {0:#04x} exceeds maximum {1:#04x}"))]
    CounterOutOfRange(u8, u8),

    /// A pressure octet equal to the sync marker cannot be framed unambiguously
    #[cfg_attr(
        feature = "std",
        error("pressure word {0:#06x} contains the sync marker octet")
    )]
    UnframablePressure(u16),

    /// The record sink refused a batch
    #[cfg_attr(feature = "std", error("sink failure: {0}"))]
    Sink(String),

    /// IO error during read/write
    #[cfg_attr(feature = "std", error("IO error: {0}"))]
    Io(String),
}

impl From<hex::FromHexError> for TelemetryError {
    fn from(err: hex::FromHexError) -> Self {
        TelemetryError::InvalidHex(err.to_string())
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for TelemetryError {
    fn from(err: std::io::Error) -> Self {
        TelemetryError::Io(err.to_string())
    }
}
