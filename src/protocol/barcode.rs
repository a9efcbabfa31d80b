//! # ESC/POS Barcode Commands
//!
//! This module implements one-dimensional barcodes (`GS k` family) and QR
//! codes (`GS ( k` family) for ESC/POS printers.
//!
//! ## Supported Symbols
//!
//! | Type | Command | Notes |
//! |------|---------|-------|
//! | 1D barcodes | GS k | NUL-terminated (function A) or counted (function B) |
//! | QR Code | GS ( k, cn = 49 | Model 1/2, error levels L/M/Q/H |
//!
//! ## 1D Barcode Usage
//!
//! ```
//! use escchain::protocol::barcode::barcode1d::{self, HriPosition};
//!
//! let mut data = Vec::new();
//! data.extend(barcode1d::height(80));
//! data.extend(barcode1d::hri_position(HriPosition::Below));
//! data.extend(barcode1d::print_terminated(b"0123456789"));
//! ```
//!
//! ## QR Code Usage
//!
//! QR codes are generated in a multi-step process:
//!
//! 1. Select the model
//! 2. Configure module size and error correction
//! 3. Store the data in the symbol storage area
//! 4. Print the stored symbol
//!
//! ```
//! use escchain::protocol::barcode::qr::{self, QrErrorLevel};
//!
//! let cmd = qr::generate(b"https://example.com", 4, QrErrorLevel::M);
//! assert!(cmd.ends_with(&[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x51, 0x30]));
//! ```

use super::commands::{GS, NUL, u16_le};

// ============================================================================
// 1D BARCODE COMMANDS (GS k)
// ============================================================================

/// 1D barcode command builders
///
/// Covers the barcode print command itself and the four settings that shape
/// it: height, module width, HRI position and HRI font.
pub mod barcode1d {
    use super::{GS, NUL};
    use crate::protocol::text::FontType;

    /// Symbol type byte used by [`print_terminated`] (CODE39, function A)
    pub const CODE39_TERMINATED: u8 = 0x04;

    /// Longest payload the function B length byte can describe
    pub const MAX_COUNTED_LEN: usize = 255;

    /// Barcode symbologies for the counted (`GS k m n`) form
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BarcodeSystem {
        /// UPC-A (11-12 digits)
        UpcA,
        /// UPC-E (6-8 or 11-12 digits)
        UpcE,
        /// EAN-13 / JAN-13 (12-13 digits)
        Ean13,
        /// EAN-8 / JAN-8 (7-8 digits)
        Ean8,
        /// CODE39 (0-9, A-Z, space, $%*+-./)
        Code39,
        /// ITF (Interleaved 2 of 5, even number of digits)
        Itf,
        /// CODABAR / NW-7
        Codabar,
        /// CODE93 (full ASCII)
        Code93,
        /// CODE128 (full ASCII, code set selected inline with `{A`/`{B`/`{C`)
        Code128,
    }

    impl BarcodeSystem {
        /// The `m` byte for `GS k m n d1...dn` (function B, 65-73)
        pub fn counted_code(self) -> u8 {
            match self {
                Self::UpcA => 65,
                Self::UpcE => 66,
                Self::Ean13 => 67,
                Self::Ean8 => 68,
                Self::Code39 => 69,
                Self::Itf => 70,
                Self::Codabar => 71,
                Self::Code93 => 72,
                Self::Code128 => 73,
            }
        }
    }

    /// HRI (Human Readable Interpretation) position
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum HriPosition {
        /// No HRI text printed (default)
        #[default]
        None = 0x00,
        /// HRI above barcode
        Above = 0x01,
        /// HRI below barcode
        Below = 0x02,
        /// HRI both above and below
        Both = 0x03,
    }

    /// # Select HRI Print Position (GS H n)
    ///
    /// | Format | Bytes |
    /// |--------|-------|
    /// | Hex    | 1D 48 n |
    pub fn hri_position(position: HriPosition) -> Vec<u8> {
        vec![GS, b'H', position as u8]
    }

    /// # Select HRI Font (GS f n)
    pub fn hri_font(font: FontType) -> Vec<u8> {
        vec![GS, b'f', font as u8]
    }

    /// # Set Barcode Height (GS h n)
    ///
    /// | Format | Bytes |
    /// |--------|-------|
    /// | Hex    | 1D 68 n |
    ///
    /// Height is in vertical dots, 1-255. The default is model dependent
    /// (162 dots on TM-T88).
    pub fn height(dots: u8) -> Vec<u8> {
        vec![GS, b'h', dots]
    }

    /// # Set Barcode Width (GS w n)
    ///
    /// Sets the module (narrowest bar) width. Typical range 2-6.
    pub fn width(n: u8) -> Vec<u8> {
        vec![GS, b'w', n]
    }

    /// # Print CODE39 Barcode, NUL-Terminated (GS k m d1...dk NUL)
    ///
    /// ## Protocol Details
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | GS k m d1...dk NUL |
    /// | Hex     | 1D 6B 04 d1...dk 00 |
    /// | Decimal | 29 107 4 d1...dk 0 |
    ///
    /// The payload is copied verbatim. It must not contain NUL, which would
    /// end the symbol early.
    ///
    /// ## Example
    ///
    /// ```
    /// use escchain::protocol::barcode::barcode1d;
    ///
    /// let cmd = barcode1d::print_terminated(b"ABC");
    /// assert_eq!(cmd, vec![0x1D, 0x6B, 0x04, b'A', b'B', b'C', 0x00]);
    /// ```
    pub fn print_terminated(data: &[u8]) -> Vec<u8> {
        let mut cmd = Vec::with_capacity(4 + data.len());
        cmd.push(GS);
        cmd.push(b'k');
        cmd.push(CODE39_TERMINATED);
        cmd.extend_from_slice(data);
        cmd.push(NUL);
        cmd
    }

    /// # Print Barcode, Counted (GS k m n d1...dn)
    ///
    /// ## Protocol Details
    ///
    /// | Format | Bytes |
    /// |--------|-------|
    /// | ASCII  | GS k m n d1...dn |
    /// | Hex    | 1D 6B m n d1...dn |
    ///
    /// - `m`: Symbology, 65-73 (see [`BarcodeSystem::counted_code`])
    /// - `n`: Payload length, 1-255
    ///
    /// The length byte is truncated to 8 bits; check against
    /// [`MAX_COUNTED_LEN`] before relying on the symbol.
    pub fn print_counted(system: BarcodeSystem, data: &[u8]) -> Vec<u8> {
        let mut cmd = Vec::with_capacity(4 + data.len());
        cmd.push(GS);
        cmd.push(b'k');
        cmd.push(system.counted_code());
        cmd.push(data.len() as u8);
        cmd.extend_from_slice(data);
        cmd
    }
}

// ============================================================================
// QR CODE COMMANDS (GS ( k)
// ============================================================================

/// QR Code command builders
///
/// Every QR command is a frame of the `GS ( k` family:
///
/// ```text
/// GS ( k pL pH cn fn [parameters...]
///        └──┬─┘ └─┬─┘
///           │     └─ cn = 49 (QR Code), fn = function number
///           └─ byte count of cn + fn + parameters, little-endian
/// ```
pub mod qr {
    use super::{GS, u16_le};

    /// Symbol type selector for QR Code within `GS ( k`
    const CN_QR: u8 = 49;

    const FN_MODEL: u8 = 65;
    const FN_MODULE_SIZE: u8 = 67;
    const FN_ERROR_CORRECTION: u8 = 69;
    const FN_STORE: u8 = 80;
    const FN_PRINT: u8 = 81;

    /// `m` parameter shared by store and print
    const M_SYMBOL: u8 = 48;

    /// QR Code model selection
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum QrModel {
        /// Original QR Code (version 1-14)
        Model1 = 49,
        /// Enhanced QR Code (version 1-40, recommended)
        #[default]
        Model2 = 50,
        /// Micro QR Code
        Micro = 51,
    }

    /// QR Code error correction level
    ///
    /// The discriminants are the wire bytes.
    ///
    /// | Level | Byte | Recovery |
    /// |-------|------|----------|
    /// | L | 48 | ~7% |
    /// | M | 49 | ~15% |
    /// | Q | 50 | ~25% |
    /// | H | 51 | ~30% |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum QrErrorLevel {
        L = 48,
        #[default]
        M = 49,
        Q = 50,
        H = 51,
    }

    /// Build one `GS ( k` frame for the QR symbol type.
    ///
    /// `pL pH` counts `cn`, `fn` and the parameters. The count is truncated
    /// to 16 bits.
    fn frame(function: u8, params: &[u8]) -> Vec<u8> {
        let len = (params.len() + 2) as u16;
        let mut cmd = Vec::with_capacity(7 + params.len());
        cmd.extend([GS, b'(', b'k']);
        cmd.extend(u16_le(len));
        cmd.push(CN_QR);
        cmd.push(function);
        cmd.extend_from_slice(params);
        cmd
    }

    /// # Select QR Model (GS ( k pL pH cn fn n1 n2), fn = 65
    ///
    /// | Format | Bytes |
    /// |--------|-------|
    /// | Hex    | 1D 28 6B 04 00 31 41 n1 00 |
    pub fn select_model(model: QrModel) -> Vec<u8> {
        frame(FN_MODEL, &[model as u8, 0])
    }

    /// # Set QR Module Size (GS ( k pL pH cn fn n), fn = 67
    ///
    /// | Format | Bytes |
    /// |--------|-------|
    /// | Hex    | 1D 28 6B 03 00 31 43 n |
    ///
    /// `n` is the width of one module in dots (1-16 on most models).
    pub fn module_size(dots: u8) -> Vec<u8> {
        frame(FN_MODULE_SIZE, &[dots])
    }

    /// # Select QR Error Correction Level (GS ( k pL pH cn fn n), fn = 69
    ///
    /// | Format | Bytes |
    /// |--------|-------|
    /// | Hex    | 1D 28 6B 03 00 31 45 n |
    pub fn error_correction(level: QrErrorLevel) -> Vec<u8> {
        frame(FN_ERROR_CORRECTION, &[level as u8])
    }

    /// # Store QR Data (GS ( k pL pH cn fn m d1...dk), fn = 80
    ///
    /// ## Protocol Details
    ///
    /// | Format | Bytes |
    /// |--------|-------|
    /// | Hex    | 1D 28 6B pL pH 31 50 30 d1...dk |
    ///
    /// `pL + pH × 256 = k + 3`. No capacity check is made against the
    /// selected version and error level.
    ///
    /// ## Example
    ///
    /// ```
    /// use escchain::protocol::barcode::qr;
    ///
    /// let cmd = qr::store(b"Hello");
    /// assert_eq!(&cmd[..8], &[0x1D, 0x28, 0x6B, 0x08, 0x00, 0x31, 0x50, 0x30]);
    /// assert_eq!(&cmd[8..], b"Hello");
    /// ```
    pub fn store(data: &[u8]) -> Vec<u8> {
        let mut params = Vec::with_capacity(1 + data.len());
        params.push(M_SYMBOL);
        params.extend_from_slice(data);
        frame(FN_STORE, &params)
    }

    /// # Print Stored QR Symbol (GS ( k pL pH cn fn m), fn = 81
    ///
    /// | Format | Bytes |
    /// |--------|-------|
    /// | Hex    | 1D 28 6B 03 00 31 51 30 |
    pub fn print() -> Vec<u8> {
        frame(FN_PRINT, &[M_SYMBOL])
    }

    /// Generate a complete QR code command sequence
    ///
    /// Emits five frames in order: model 2, module size, error correction,
    /// data store, print.
    ///
    /// ## Example
    ///
    /// ```
    /// use escchain::protocol::barcode::qr::{self, QrErrorLevel};
    ///
    /// let commands = qr::generate(b"Hello World", 4, QrErrorLevel::L);
    /// assert_eq!(commands.len(), 9 + 8 + 8 + (8 + 11) + 8);
    /// ```
    pub fn generate(data: &[u8], module_dots: u8, level: QrErrorLevel) -> Vec<u8> {
        let mut cmd = Vec::new();
        cmd.extend(select_model(QrModel::Model2));
        cmd.extend(module_size(module_dots));
        cmd.extend(error_correction(level));
        cmd.extend(store(data));
        cmd.extend(print());
        cmd
    }
}

// ============================================================================
// TESTS
// ============================================================================
