//! Library entry for barotel-cli used by integration tests and embedding.

pub mod commands;
pub mod sinks;

use barotel_core::DecodeMode;

/// Pressure decode strategy selector
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum ModeArg {
    /// Big-endian 16-bit pressure word scaled by 1/100
    Scaled,
    /// Legacy decimal reading of the pressure hex text
    Legacy,
}

impl From<ModeArg> for DecodeMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Scaled => DecodeMode::ScaledInteger,
            ModeArg::Legacy => DecodeMode::HexDigitConcatenation,
        }
    }
}

/// Parse a marker octet given as two hex characters (e.g. "80")
pub fn parse_marker(text: &str) -> anyhow::Result<u8> {
    let octets = hex::decode(text)?;
    anyhow::ensure!(octets.len() == 1, "marker must be exactly one octet");
    Ok(octets[0])
}
