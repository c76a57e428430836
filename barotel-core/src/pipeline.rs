//! End-to-end decode pipeline
//!
//! Source adapter, resynchronizer, framer, validator, and decoder composed
//! into pure entry points. Each call is a stateless transformation of one
//! input stream into an ordered record list; per-frame anomalies are
//! absorbed into counters, stream-level and sink-level failures propagate
//! once.

use crate::decode::decode_frame;
use crate::error::TelemetryError;
use crate::framer::frame_octets;
use crate::sink::RecordSink;
use crate::types::{DecodeConfig, SensorRecord};
use crate::validator::{filter_frames, FrameStats};
use crate::{resync, source};
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// Records plus acceptance counters from one decode call
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeReport {
    /// Decoded records in frame order
    pub records: Vec<SensorRecord>,

    /// What the framer produced and the validator kept
    pub stats: FrameStats,
}

/// Decode a raw octet stream.
///
/// Never fails: edge corruption only costs the frames it touches. With
/// `config.trim` set, the stream is first cut to its marker-bounded window;
/// a clean stream decodes identically either way.
pub fn decode_octet_stream(data: &[u8], config: &DecodeConfig) -> DecodeReport {
    let window = if config.trim {
        resync::trim_octets(data, config.marker)
    } else {
        data
    };

    let candidates = frame_octets(window, config.marker);
    let (frames, mut stats) = filter_frames(&candidates, config.marker);

    let mut records = Vec::with_capacity(frames.len());
    for frame in &frames {
        match decode_frame(frame, config.mode) {
            Some(record) => records.push(record),
            None => stats.undecodable += 1,
        }
    }

    #[cfg(feature = "logging")]
    debug!(
        "Decoded {} records from {} octets ({} candidates, {} rejected)",
        records.len(),
        data.len(),
        stats.candidates,
        stats.rejected
    );

    DecodeReport { records, stats }
}

/// Decode a hex-encoded stream, repairing odd-length input first.
pub fn decode_hex_stream(
    text: &str,
    config: &DecodeConfig,
) -> Result<DecodeReport, TelemetryError> {
    let octets = source::octets_from_hex(text, config.marker)?;
    Ok(decode_octet_stream(&octets, config))
}

/// Decode a raw octet stream and hand the batch to a sink.
pub fn decode_octets_to_sink<S: RecordSink>(
    data: &[u8],
    config: &DecodeConfig,
    sink: &mut S,
) -> Result<DecodeReport, TelemetryError> {
    let report = decode_octet_stream(data, config);
    sink.persist(&report.records)?;
    Ok(report)
}

/// Decode a hex-encoded stream and hand the batch to a sink.
pub fn decode_hex_to_sink<S: RecordSink>(
    text: &str,
    config: &DecodeConfig,
    sink: &mut S,
) -> Result<DecodeReport, TelemetryError> {
    let report = decode_hex_stream(text, config)?;
    sink.persist(&report.records)?;
    Ok(report)
}
