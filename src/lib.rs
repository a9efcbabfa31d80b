//! # Escchain - ESC/POS Command Encoder
//!
//! Escchain builds byte streams for Epson TM series and compatible receipt
//! printers. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders, one function per command
//! - **Command chain**: a fluent builder that validates parameters and
//!   records range violations without interrupting the job
//! - **Transport**: raw writes to a printer device node
//!
//! ## Quick Start
//!
//! ```no_run
//! use escchain::{
//!     CommandChain,
//!     protocol::{barcode::qr::QrErrorLevel, commands::CutMode, text::Alignment},
//!     transport::DeviceTransport,
//! };
//!
//! let mut chain = CommandChain::new();
//! chain
//!     .reset_setting()
//!     .text_align(Alignment::Center)
//!     .letter_size(2, 2)
//!     .text("THANK YOU")
//!     .new_line()
//!     .letter_size(1, 1)
//!     .print_qr_code(6, QrErrorLevel::M, "https://example.com")
//!     .feed_to_cut()
//!     .cut(CutMode::Partial);
//!
//! for err in chain.errors() {
//!     eprintln!("{err}");
//! }
//!
//! let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
//! transport.write_all(chain.bytes())?;
//!
//! # Ok::<(), escchain::EscchainError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chain`] | `CommandChain` builder with deferred errors |
//! | [`protocol`] | ESC/POS command builders |
//! | [`receipt`] | Sample receipts |
//! | [`transport`] | Communication backends |
//! | [`printer`] | Printer configurations |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Written against the Epson TM-T88 command reference. Other printers
//! implementing standard ESC/POS should work; see [`PrinterConfig`] for the
//! built-in paper profiles.

pub mod chain;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod transport;

// Re-exports for convenience
pub use chain::CommandChain;
pub use error::{ChainError, EscchainError};
pub use printer::PrinterConfig;
pub use transport::DeviceTransport;
