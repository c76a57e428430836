use anyhow::{Context, Result};
use barotel_core::{decode_hex_stream, decode_octet_stream, DecodeConfig};
use colored::*;
use std::fs;
use tracing::info;

use crate::parse_marker;

pub fn execute(input: &str, raw: bool, marker: &str) -> Result<()> {
    info!("Inspecting file: {}", input);

    let config = DecodeConfig {
        marker: parse_marker(marker)?,
        ..Default::default()
    };

    let report = if raw {
        let data =
            fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;
        decode_octet_stream(&data, &config)
    } else {
        let text = fs::read_to_string(input)
            .with_context(|| format!("Failed to read input file: {}", input))?;
        decode_hex_stream(text.trim(), &config)
            .with_context(|| format!("Failed to decode stream from {}", input))?
    };

    if report.records.is_empty() {
        println!("{} No valid frames found", "✗".red());
        return Ok(());
    }

    println!("\n=== Stream Statistics ===");
    println!("Candidate frames:  {}", report.stats.candidates);
    println!(
        "Accepted frames:   {}",
        report.stats.accepted.to_string().green()
    );
    if report.stats.rejected > 0 {
        println!(
            "Rejected frames:   {}",
            report.stats.rejected.to_string().red()
        );
    } else {
        println!("Rejected frames:   {}", report.stats.rejected);
    }
    println!(
        "Acceptance rate:   {:.2}%",
        report.stats.acceptance_rate() * 100.0
    );

    let first = report.records.first().unwrap();
    let last = report.records.last().unwrap();
    println!("\n=== Record Range ===");
    println!("Records decoded:   {}", report.records.len());
    println!("First counter:     {}", first.counter);
    println!("Last counter:      {}", last.counter);

    Ok(())
}
