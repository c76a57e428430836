//! # Barotel Core
//!
//! Framing and decode for a pressure sensor telemetry stream: fixed-width
//! packets delimited by a sync marker, recoverable even when the stream
//! arrives truncated, misaligned, or wrapped in garbage at the edges.
//!
//! ## Modules
//!
//! - `constants`: Wire format constants and limits
//! - `types`: Core types (ValidatedFrame, SensorRecord, DecodeConfig)
//! - `source`: Octet source adapter for hex-encoded input
//! - `resync`: Trimming corrupted streams to their marker-bounded window
//! - `framer`: Fixed-width candidate framing
//! - `validator`: Structural frame validation
//! - `decode`: Numeric decode of validated frames
//! - `encoder`: Frame encoding for test vectors and synthetic streams
//! - `sink`: Batch persistence contract for decoded records
//! - `pipeline`: End-to-end decode entry points

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod decode;
pub mod encoder;
pub mod error;
pub mod framer;
pub mod pipeline;
pub mod resync;
pub mod sink;
pub mod source;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use error::TelemetryError;
pub use pipeline::{
    decode_hex_stream, decode_hex_to_sink, decode_octet_stream, decode_octets_to_sink,
    DecodeReport,
};
pub use sink::{MemorySink, RecordSink};
pub use types::{DecodeConfig, DecodeMode, SensorRecord, ValidatedFrame};
pub use validator::FrameStats;

/// Result type alias for telemetry operations
pub type Result<T> = core::result::Result<T, TelemetryError>;
