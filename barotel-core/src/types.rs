//! Core types for decoded telemetry

use crate::constants::{COUNTER_MAX, FRAME_WIDTH, SYNC_MARKER};
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// How the two pressure octets of a frame become a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DecodeMode {
    /// Big-endian 16-bit raw value scaled by 1/100 (canonical)
    #[default]
    ScaledInteger,

    /// Hex text of the two octets read as the integer and fractional parts
    /// of a decimal literal (legacy). Undefined for octets whose hex text
    /// carries `a..f`; such frames are dropped as undecodable.
    HexDigitConcatenation,
}

/// Decode configuration for one stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Octet that marks the start of a packet
    pub marker: u8,

    /// Pressure decode strategy
    pub mode: DecodeMode,

    /// Trim the octet stream to its marker-bounded window before framing.
    /// Idempotent on clean input; off by default to match the reference
    /// byte path, which relies on validation to shed edge fragments.
    pub trim: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            marker: SYNC_MARKER,
            mode: DecodeMode::default(),
            trim: false,
        }
    }
}

/// A frame that passed structural validation and is safe to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedFrame {
    octets: [u8; FRAME_WIDTH],
}

impl ValidatedFrame {
    /// Wrap a candidate frame if it is structurally sound: exactly
    /// [`FRAME_WIDTH`] octets, leading marker, counter within range.
    pub fn try_new(candidate: &[u8], marker: u8) -> Option<Self> {
        if candidate.len() != FRAME_WIDTH {
            return None;
        }
        if candidate[0] != marker || candidate[1] > COUNTER_MAX {
            return None;
        }
        let mut octets = [0u8; FRAME_WIDTH];
        octets.copy_from_slice(candidate);
        Some(Self { octets })
    }

    /// The marker octet the frame arrived under
    pub fn marker(&self) -> u8 {
        self.octets[0]
    }

    /// Sequence counter, 0..=[`COUNTER_MAX`]
    pub fn counter(&self) -> u8 {
        self.octets[1]
    }

    /// The two pressure octets, high first
    pub fn pressure_octets(&self) -> (u8, u8) {
        (self.octets[2], self.octets[3])
    }

    /// Raw pressure word, big-endian
    pub fn pressure_raw(&self) -> u16 {
        u16::from_be_bytes([self.octets[2], self.octets[3]])
    }

    /// The underlying wire octets
    pub fn as_octets(&self) -> &[u8; FRAME_WIDTH] {
        &self.octets
    }
}

/// One decoded sensor reading, ready for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    /// Lowercase hex rendering of the marker the packet arrived under
    pub identifier: String,

    /// Packet sequence counter
    pub counter: u8,

    /// Pressure reading after decode
    pub pressure: f64,
}
