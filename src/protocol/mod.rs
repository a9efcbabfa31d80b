//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! used by Epson TM series and compatible receipt printers. Every function
//! returns the exact bytes of one command; nothing is validated here.
//! [`crate::CommandChain`] layers parameter validation on top.
//!
//! ## Module Structure
//!
//! - [`commands`]: Prefix bytes, init, feeds and cutting
//! - [`text`]: Print modes, character size, alignment and layout
//! - [`graphics`]: Column bit images (`ESC *`)
//! - [`barcode`]: 1D barcodes and QR codes
//!
//! ## Usage Example
//!
//! ```
//! use escchain::protocol::{barcode, commands, text};
//!
//! let mut data = Vec::new();
//!
//! data.extend(commands::init());
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(text::bold(true));
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold(false));
//! data.extend(barcode::barcode1d::print_terminated(b"0123456789"));
//! data.extend(commands::feed_to_cut());
//! data.extend(commands::cut(commands::CutMode::Partial));
//!
//! // Send `data` to the printer via a transport...
//! ```

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod text;
