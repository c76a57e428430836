use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use barotel_cli::{commands, ModeArg};

#[derive(Parser)]
#[command(name = "barotel")]
#[command(about = "Barotel - pressure telemetry stream decoder", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a telemetry stream into sensor records
    Decode {
        /// Input file: hex text, or raw octets with --raw
        #[arg(short, long)]
        input: String,

        /// Output JSON file for decoded records (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Pressure decode strategy
        #[arg(long, value_enum, default_value = "scaled")]
        mode: ModeArg,

        /// Sync marker octet as two hex characters
        #[arg(long, default_value = "80")]
        marker: String,

        /// Treat the input file as raw octets instead of hex text
        #[arg(long)]
        raw: bool,

        /// Trim the stream to its marker-bounded window before framing
        #[arg(long)]
        trim: bool,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,
    },

    /// Pack JSON readings into a hex telemetry stream
    Pack {
        /// Input JSON file (array of {counter, pressure} readings)
        #[arg(short, long)]
        input: String,

        /// Output file for the hex stream
        #[arg(short, long)]
        output: String,

        /// Sync marker octet as two hex characters
        #[arg(long, default_value = "80")]
        marker: String,
    },

    /// Decode a stream and report acceptance statistics
    Stats {
        /// Input file: hex text, or raw octets with --raw
        #[arg(short, long)]
        input: String,

        /// Treat the input file as raw octets instead of hex text
        #[arg(long)]
        raw: bool,

        /// Sync marker octet as two hex characters
        #[arg(long, default_value = "80")]
        marker: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Decode {
            input,
            output,
            mode,
            marker,
            raw,
            trim,
            stats_only,
        } => commands::decode::execute(
            &input,
            output.as_deref(),
            mode,
            &marker,
            raw,
            trim,
            stats_only,
        ),

        Commands::Pack {
            input,
            output,
            marker,
        } => commands::pack::execute(&input, &output, &marker),

        Commands::Stats { input, raw, marker } => commands::stats::execute(&input, raw, &marker),
    }
}
