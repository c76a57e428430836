//! Fixed-width candidate framing
//!
//! A single forward scan with one state variable: the currently open frame.
//! No lookahead, no backtracking. Candidates carry no structural
//! guarantees; the validator decides what survives.

use crate::constants::FRAME_WIDTH;
use alloc::vec::Vec;
use bytes::{BufMut, Bytes, BytesMut};

/// Segment an octet sequence into candidate frames.
///
/// A frame closes when the marker shows up or the open frame already holds
/// [`FRAME_WIDTH`] octets; the cut appends whatever frame is open, even the
/// empty one a leading marker produces. End of input closes the remainder
/// regardless of its length. An empty input therefore yields a single empty
/// candidate, and consecutive markers yield empty candidates between them.
pub fn frame_octets(data: &[u8], marker: u8) -> Vec<Bytes> {
    let mut frames = Vec::new();
    let mut frame = BytesMut::with_capacity(FRAME_WIDTH);

    for &octet in data {
        if octet == marker || frame.len() == FRAME_WIDTH {
            frames.push(frame.freeze());
            frame = BytesMut::with_capacity(FRAME_WIDTH);
        }
        frame.put_u8(octet);
    }
    frames.push(frame.freeze());

    frames
}
