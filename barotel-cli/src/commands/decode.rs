use anyhow::{Context, Result};
use barotel_core::{decode_hex_stream, decode_octet_stream, DecodeConfig, RecordSink};
use std::fs;
use tracing::info;

use crate::sinks::{JsonFileSink, StdoutSink};
use crate::{parse_marker, ModeArg};

pub fn execute(
    input: &str,
    output: Option<&str>,
    mode: ModeArg,
    marker: &str,
    raw: bool,
    trim: bool,
    stats_only: bool,
) -> Result<()> {
    info!("Decoding file: {}", input);

    let config = DecodeConfig {
        marker: parse_marker(marker)?,
        mode: mode.into(),
        trim,
    };

    let report = if raw {
        let data =
            fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;
        info!("Read {} octets", data.len());
        decode_octet_stream(&data, &config)
    } else {
        let text = fs::read_to_string(input)
            .with_context(|| format!("Failed to read input file: {}", input))?;
        let text = text.trim();
        info!("Read {} hex chars", text.len());
        decode_hex_stream(text, &config)
            .with_context(|| format!("Failed to decode stream from {}", input))?
    };

    // Print statistics
    println!("\n=== Decode Results ===");
    println!("Candidate frames:  {}", report.stats.candidates);
    println!("Accepted frames:   {}", report.stats.accepted);
    println!("Rejected frames:   {}", report.stats.rejected);
    if report.stats.undecodable > 0 {
        println!("Undecodable:       {}", report.stats.undecodable);
    }
    println!(
        "Acceptance rate:   {:.2}%",
        report.stats.acceptance_rate() * 100.0
    );
    println!();

    if stats_only {
        return Ok(());
    }

    match output {
        Some(path) => {
            let mut sink = JsonFileSink::new(path);
            sink.persist(&report.records)
                .with_context(|| format!("Failed to persist records to {}", path))?;
            info!("Records written to: {}", path);
        }
        None => {
            println!("=== Decoded Records ===");
            StdoutSink.persist(&report.records)?;
        }
    }

    Ok(())
}
