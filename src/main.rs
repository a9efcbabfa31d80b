//! # Escchain CLI
//!
//! Command-line interface for ESC/POS receipt printing.
//!
//! ## Usage
//!
//! ```bash
//! # List available receipts and printer profiles
//! escchain list
//!
//! # Print a receipt to the default device (/dev/usb/lp0)
//! escchain print hello
//!
//! # Print for a 58mm printer on a serial port
//! escchain print --printer tm-m10 --device /dev/ttyUSB0 showcase
//!
//! # Inspect the bytes instead of printing
//! escchain print --hex barcode
//!
//! # Save the job and report deferred errors as JSON
//! escchain print --output job.bin --json showcase
//! ```
//!
//! Set `RUST_LOG=escchain=trace` to log every directive.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use escchain::{
    CommandChain, EscchainError, PrinterConfig,
    error::ErrorReport,
    receipt,
    transport::DeviceTransport,
};

/// Escchain - ESC/POS receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "escchain")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a receipt and send it to the printer
    Print {
        /// Receipt to print (see `escchain list`)
        receipt: String,

        /// Printer device path [default: /dev/usb/lp0]
        #[arg(long)]
        device: Option<PathBuf>,

        /// Printer profile
        #[arg(long, default_value = "tm-t88")]
        printer: String,

        /// Write a hex dump to stdout instead of printing
        #[arg(long, conflicts_with = "output")]
        hex: bool,

        /// Write the raw job to a file instead of printing
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print deferred errors to stdout as a JSON array
        #[arg(long)]
        json: bool,

        /// Refuse to send a chain that recorded deferred errors
        #[arg(long)]
        strict: bool,
    },

    /// List available receipts and printer profiles
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EscchainError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            println!("Available receipts:");
            for name in receipt::list_receipts() {
                println!("  {}", name);
            }
            println!("\nPrinter profiles:");
            for config in PrinterConfig::ALL {
                println!(
                    "  {:<8} {} ({} dots, {} columns)",
                    config.name, config.model, config.width_dots, config.columns_font_a
                );
            }
        }
        Commands::Print {
            receipt: name,
            device,
            printer,
            hex,
            output,
            json,
            strict,
        } => {
            let config = PrinterConfig::by_name(&printer).ok_or_else(|| EscchainError::Unknown {
                kind: "printer profile",
                name: printer.clone(),
            })?;
            let chain = receipt::by_name(&name, &config).ok_or_else(|| EscchainError::Unknown {
                kind: "receipt",
                name: name.clone(),
            })?;

            report_errors(&chain, json)?;
            if strict && !chain.is_conformant() {
                return Err(EscchainError::Rejected(chain.errors().len()));
            }

            let data = chain.into_bytes();
            if hex {
                print!("{}", hex_dump(&data));
            } else if let Some(path) = output {
                fs::write(&path, &data)?;
                info!(path = %path.display(), bytes = data.len(), "saved job");
            } else {
                let mut transport = match &device {
                    Some(path) => DeviceTransport::open(path)?,
                    None => DeviceTransport::open_default()?,
                };
                transport.write_all(&data)?;
                info!(bytes = data.len(), "printed {}", name);
            }
        }
    }

    Ok(())
}

/// Log each deferred error, and print them as JSON when asked
fn report_errors(chain: &CommandChain, json: bool) -> Result<(), EscchainError> {
    for err in chain.errors() {
        warn!(call = err.call(), "{err}");
    }
    if json {
        let reports: Vec<ErrorReport> = chain.errors().iter().map(|e| e.report()).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

/// 16 bytes per line: offset, hex bytes, printable ASCII
fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in data.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();
        out.push_str(&format!("{:08x}  {:<47}  |{}|\n", row * 16, hex.join(" "), ascii));
    }
    out
}
