//! Batch persistence contract for decoded records
//!
//! The decode pipeline hands each call's complete, ordered record list to a
//! sink as one batch, so the sink can make its own transactional decision.
//! Sinks are caller-owned handles with caller-controlled lifetime; nothing
//! here is process-wide.

use crate::error::TelemetryError;
use crate::types::SensorRecord;
use alloc::vec::Vec;

/// Batch persistence for decoded records.
///
/// `persist` takes the whole batch of one decode call and commits it
/// all-or-nothing: either every record lands or the call fails once with
/// [`TelemetryError::Sink`]. The core never retries; retry policy belongs
/// to the sink's own collaborators.
pub trait RecordSink {
    /// Persist one decode batch.
    fn persist(&mut self, batch: &[SensorRecord]) -> Result<(), TelemetryError>;
}

/// Sink that buffers batches in memory, one entry per persist call.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    batches: Vec<Vec<SensorRecord>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Batches persisted so far, in call order
    pub fn batches(&self) -> &[Vec<SensorRecord>] {
        &self.batches
    }

    /// Total number of records across all batches
    pub fn len(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    /// True when nothing has been persisted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSink for MemorySink {
    fn persist(&mut self, batch: &[SensorRecord]) -> Result<(), TelemetryError> {
        self.batches.push(batch.to_vec());
        Ok(())
    }
}
