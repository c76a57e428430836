//! Structural validation of candidate frames
//!
//! A lossy filter by design: malformed candidates are transmission noise,
//! dropped silently and only visible as aggregate counters.

use crate::types::ValidatedFrame;
use alloc::vec::Vec;
use bytes::Bytes;

#[cfg(feature = "logging")]
use tracing::debug;

/// Aggregate acceptance counters for one decode pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Candidate frames produced by the framer
    pub candidates: usize,

    /// Frames that passed structural validation
    pub accepted: usize,

    /// Frames dropped by validation
    pub rejected: usize,

    /// Accepted frames the selected decode mode could not express
    /// (legacy mode only; the canonical decode is total)
    pub undecodable: usize,
}

impl FrameStats {
    /// Fraction of candidates that passed validation, 0.0 when nothing was framed
    pub fn acceptance_rate(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.accepted as f64 / self.candidates as f64
        }
    }
}

/// Keep only the candidates that are safe to decode, counting what was
/// dropped.
///
/// Accepts a frame iff it is exactly four octets, starts with the marker,
/// and carries an in-range counter. Everything else is absorbed without an
/// error, in original order.
pub fn filter_frames(candidates: &[Bytes], marker: u8) -> (Vec<ValidatedFrame>, FrameStats) {
    let mut stats = FrameStats {
        candidates: candidates.len(),
        ..Default::default()
    };
    let mut accepted = Vec::new();

    for candidate in candidates {
        match ValidatedFrame::try_new(candidate, marker) {
            Some(frame) => {
                stats.accepted += 1;
                accepted.push(frame);
            }
            None => stats.rejected += 1,
        }
    }

    #[cfg(feature = "logging")]
    debug!(
        "Validated {} of {} candidate frames",
        stats.accepted, stats.candidates
    );

    (accepted, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SYNC_MARKER;
    use crate::framer::frame_octets;

    #[test]
    fn test_filter_keeps_order_and_counts() {
        let data = [
            0x34, 0xff, 0xff, 0xff, // leading garbage
            0x80, 0x49, 0x00, 0x00, // valid
            0x80, 0x4a, 0x00, 0x00, // valid
            0x82, 0x4c, 0x00, 0x00, // wrong marker
            0x80, 0x4d, 0x00, 0x00, // valid
        ];
        let candidates = frame_octets(&data, SYNC_MARKER);
        let (frames, stats) = filter_frames(&candidates, SYNC_MARKER);

        let counters: Vec<u8> = frames.iter().map(|f| f.counter()).collect();
        assert_eq!(counters, vec![0x49, 0x4a, 0x4d]);
        assert_eq!(stats.candidates, candidates.len());
        assert_eq!(stats.accepted, 3);
        assert_eq!(stats.rejected, stats.candidates - 3);
    }

    #[test]
    fn test_counter_out_of_range_rejected() {
        let candidates = frame_octets(&[0x80, 0x80, 0x00, 0x00], SYNC_MARKER);
        let (frames, stats) = filter_frames(&candidates, SYNC_MARKER);
        assert!(frames.is_empty());
        assert_eq!(stats.accepted, 0);
    }

    #[test]
    fn test_empty_candidate_dropped_without_error() {
        let candidates = frame_octets(&[], SYNC_MARKER);
        let (frames, stats) = filter_frames(&candidates, SYNC_MARKER);
        assert!(frames.is_empty());
        assert_eq!(stats.candidates, 1);
        assert_eq!(stats.rejected, 1);
    }

    #[test]
    fn test_acceptance_rate() {
        let stats = FrameStats {
            candidates: 4,
            accepted: 3,
            rejected: 1,
            undecodable: 0,
        };
        assert!((stats.acceptance_rate() - 0.75).abs() < f64::EPSILON);
        assert_eq!(FrameStats::default().acceptance_rate(), 0.0);
    }
}
