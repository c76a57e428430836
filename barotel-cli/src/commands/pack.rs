use anyhow::{bail, Context, Result};
use barotel_core::encoder::encode_stream;
use serde::Deserialize;
use std::fs;
use tracing::info;

use crate::parse_marker;

#[derive(Deserialize)]
struct Reading {
    counter: u8,
    pressure: f64,
}

pub fn execute(input: &str, output: &str, marker: &str) -> Result<()> {
    info!("Packing readings from {} to {}", input, output);

    let marker = parse_marker(marker)?;

    let content =
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {}", input))?;

    let readings: Vec<Reading> =
        serde_json::from_str(&content).with_context(|| "Failed to parse JSON input")?;

    info!("Found {} readings to pack", readings.len());

    let mut raw_readings = Vec::with_capacity(readings.len());
    for (i, reading) in readings.iter().enumerate() {
        let raw = (reading.pressure * 100.0).round();
        if !(0.0..=f64::from(u16::MAX)).contains(&raw) {
            bail!(
                "reading {}: pressure {} is outside the encodable range",
                i,
                reading.pressure
            );
        }
        raw_readings.push((reading.counter, raw as u16));
    }

    let stream = encode_stream(&raw_readings, marker)
        .with_context(|| "Failed to encode readings into a stream")?;
    let text = hex::encode(&stream);

    fs::write(output, &text).with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Successfully packed {} readings ({} hex chars)",
        readings.len(),
        text.len()
    );

    Ok(())
}
