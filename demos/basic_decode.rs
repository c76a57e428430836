//! Basic decoding example

use barotel_core::{decode_octet_stream, encoder::encode_stream, DecodeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Barotel Basic Decoding Example\n");

    // Create a clean stream of five readings
    let readings: Vec<(u8, u16)> = (1u8..=5).map(|i| (i, u16::from(i) * 57)).collect();
    let stream = encode_stream(&readings, 0x80)?;

    println!("Encoded {} readings into {} octets", readings.len(), stream.len());
    println!("Wire form: {}\n", hex::encode(&stream));

    // Decode it back
    let report = decode_octet_stream(&stream, &DecodeConfig::default());

    for record in &report.records {
        println!(
            "sensor {}  counter {:3}  pressure {:.2}",
            record.identifier, record.counter, record.pressure
        );
    }

    println!(
        "\n{} of {} candidate frames accepted",
        report.stats.accepted, report.stats.candidates
    );

    Ok(())
}
