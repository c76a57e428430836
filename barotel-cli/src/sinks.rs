//! Record sinks for the command line
//!
//! Both sinks take the whole batch in one call and either land it
//! completely or fail once, matching the core's persistence contract.

use barotel_core::{RecordSink, SensorRecord, TelemetryError};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Sink that writes each batch as one pretty-printed JSON array.
///
/// The batch is serialized in full before any byte reaches disk, so a
/// serialization failure leaves the target untouched.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Create a sink targeting the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for JsonFileSink {
    fn persist(&mut self, batch: &[SensorRecord]) -> Result<(), TelemetryError> {
        let json = serde_json::to_string_pretty(batch)
            .map_err(|e| TelemetryError::Sink(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| TelemetryError::Sink(e.to_string()))?;

        info!(
            "Persisted {} records to {}",
            batch.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Sink that prints one line per record to stdout.
pub struct StdoutSink;

impl RecordSink for StdoutSink {
    fn persist(&mut self, batch: &[SensorRecord]) -> Result<(), TelemetryError> {
        for record in batch {
            println!(
                "{}  counter {:3}  pressure {:.2}",
                record.identifier, record.counter, record.pressure
            );
        }
        Ok(())
    }
}
