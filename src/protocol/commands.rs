//! # ESC/POS Protocol Commands
//!
//! This module implements the basic command set shared by ESC/POS thermal and
//! impact receipt printers (Epson TM series and compatibles).
//!
//! ## Protocol Overview
//!
//! ESC/POS commands are byte sequences starting with one of three prefix
//! bytes, followed by an opcode and zero or more parameter bytes:
//!
//! | Prefix | Hex  | Used for |
//! |--------|------|----------|
//! | ESC    | 0x1B | Print modes, line spacing, feeds, bit images |
//! | FS     | 0x1C | Kanji control and paper layout (`FS ( L`) |
//! | GS     | 0x1D | Character size, barcodes, 2D symbols, cutting |
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `HT`
//! - Two bytes: `ESC @`, `ESC <`
//! - Fixed parameters: `ESC J n`, `GS L nL nH`
//! - Length-prefixed frames: `GS ( k pL pH cn fn [parameters]`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B).
pub const ESC: u8 = 0x1B;

/// FS (File Separator) - Kanji and paper layout command prefix
pub const FS: u8 = 0x1C;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size, barcodes, 2D symbols and the cutter.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints the data in the line buffer and feeds one line based on the
/// current line spacing.
pub const LF: u8 = 0x0A;

/// HT (Horizontal Tab) - Advance to next tab position
pub const HT: u8 = 0x09;

/// NUL - Terminator for variable-length parameter lists
pub const NUL: u8 = 0x00;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets all modes to their power-on values.
/// This should be the first command of every print job.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Character modes (bold, underline, reverse, size) disabled
/// - Alignment reset to left, line spacing to default
/// - Tab positions reset to every 8 characters
///
/// ## What Does NOT Reset
///
/// - DIP switch and memory switch settings
/// - NV graphics and user NV memory
/// - Data in the receive buffer
///
/// ## Example
///
/// ```
/// use escchain::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Return Home (ESC <)
///
/// Moves the print head to the standby position. Only meaningful on
/// impact (dot matrix) printers; thermal printers ignore it.
#[inline]
pub fn return_home() -> Vec<u8> {
    vec![ESC, b'<']
}

/// # Turn Unidirectional Print Mode On/Off (ESC U n)
///
/// | Format | Bytes |
/// |--------|-------|
/// | Hex    | 1B 55 n |
///
/// Unidirectional printing improves vertical alignment of graphics on
/// impact printers at the cost of speed.
#[inline]
pub fn unidirectional(enabled: bool) -> Vec<u8> {
    vec![ESC, b'U', enabled as u8]
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Print and Feed Paper (ESC J n)
///
/// Prints the buffered line and feeds the paper by `n` motion units.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC J n   |
/// | Hex     | 1B 4A n   |
/// | Decimal | 27 74 n   |
///
/// ## Parameters
///
/// - `n`: Feed amount in vertical motion units (0-255). The unit is set with
///   `GS P` and defaults to 1/180 inch on most TM models.
///
/// ## Example
///
/// ```
/// use escchain::protocol::commands;
///
/// assert_eq!(commands::print_and_feed(12), vec![0x1B, 0x4A, 12]);
/// ```
#[inline]
pub fn print_and_feed(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

/// # Print and Reverse Feed (ESC K n)
///
/// Prints the buffered line and feeds the paper *backwards* by `n` motion
/// units. Printers without reverse feed treat it as a no-op.
#[inline]
pub fn print_and_back_feed(n: u8) -> Vec<u8> {
    vec![ESC, b'K', n]
}

/// # Print and Feed n Lines (ESC d n)
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC d n   |
/// | Hex     | 1B 64 n   |
/// | Decimal | 27 100 n  |
///
/// Feeds `n` lines at the current line spacing.
#[inline]
pub fn print_and_line_feed(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Print and Reverse Feed n Lines (ESC e n)
#[inline]
pub fn print_and_back_line_feed(n: u8) -> Vec<u8> {
    vec![ESC, b'e', n]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// Cut modes for `GS V`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutMode {
    /// Cut the paper completely
    #[default]
    Full = 0x00,
    /// Leave one point uncut so the receipt hangs from the roll
    Partial = 0x01,
}

/// # Cut Paper (GS V m)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V m   |
/// | Hex     | 1D 56 m  |
/// | Decimal | 29 86 m  |
///
/// Cuts at the current position. The last printed line is still between
/// the head and the cutter, so most jobs call [`feed_to_cut`] first.
#[inline]
pub fn cut(mode: CutMode) -> Vec<u8> {
    vec![GS, b'V', mode as u8]
}

/// # Feed to Cutting Position (FS ( L pL pH fn m)
///
/// Feeds the paper until the last printed line has passed the cutter.
///
/// ## Protocol Details
///
/// | Format | Bytes |
/// |--------|-------|
/// | ASCII  | FS ( L 2 0 B 0 |
/// | Hex    | 1C 28 4C 02 00 42 30 |
///
/// `fn = 66` selects "feed to cutting position" within the `FS ( L`
/// paper layout family.
#[inline]
pub fn feed_to_cut() -> Vec<u8> {
    let mut cmd = vec![FS, b'(', b'L'];
    cmd.extend(u16_le(2));
    cmd.extend([66, b'0']);
    cmd
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ESC/POS uses little-endian encoding for all multi-byte integers
/// (`nL nH`, `pL pH`).
///
/// ## Example
///
/// ```
/// use escchain::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
