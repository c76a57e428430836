//! Example demonstrating recovery from a damaged telemetry stream

use barotel_core::{decode_hex_stream, encoder::encode_stream, DecodeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Barotel Damaged Stream Recovery Example\n");

    // Step 1: Create a clean stream with 10 readings
    println!("Step 1: Creating 10 readings...");
    let readings: Vec<(u8, u16)> = (0u8..10).map(|i| (i, 5700 + u16::from(i))).collect();
    let stream = encode_stream(&readings, 0x80)?;
    let mut text = hex::encode(&stream);
    println!("Clean stream: {} hex chars\n", text.len());

    // Step 2: Simulate damage at both edges
    println!("Step 2: Simulating damage...");
    text.insert_str(0, "34ffffff");
    println!("Prepended 8 chars of garbage");
    text.truncate(text.len() - 3);
    println!("Truncated the trailing packet mid-octet");
    println!("Damaged stream: {} hex chars\n", text.len());

    // Step 3: Decode; the odd length triggers edge repair
    println!("Step 3: Decoding damaged stream...");
    let report = decode_hex_stream(&text, &DecodeConfig::default())?;

    for record in &report.records {
        println!(
            "recovered counter {:3}  pressure {:.2}",
            record.counter, record.pressure
        );
    }

    println!(
        "\nRecovered {} of {} readings ({} candidates, {} rejected)",
        report.records.len(),
        readings.len(),
        report.stats.candidates,
        report.stats.rejected
    );

    Ok(())
}
