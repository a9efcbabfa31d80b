//! # ESC/POS Bit Image Commands
//!
//! This module implements the column-oriented bit image command `ESC *`.
//! Image data must already be rasterized into the printer's byte layout;
//! nothing here decodes or dithers images.
//!
//! ## Bit Image Modes
//!
//! | Mode | m | Dots per column | Bytes per column | Horizontal density |
//! |------|---|-----------------|------------------|--------------------|
//! | 8-dot single density | 0x00 | 8 | 1 | half |
//! | 8-dot double density | 0x01 | 8 | 1 | normal |
//! | 24-dot single density | 0x20 | 24 | 3 | half |
//! | 24-dot double density | 0x21 | 24 | 3 | normal |
//!
//! ## Column Layout
//!
//! Data is sent column by column, left to right. In 8-dot modes each byte is
//! one column; in 24-dot modes three consecutive bytes form one column:
//!
//! ```text
//!            col 0   col 1   col 2
//!          ┌───────┬───────┬───────┐
//! dots 0-7 │ d[0]  │ d[3]  │ d[6]  │   bit 7 (MSB) = top dot
//! dots 8-15│ d[1]  │ d[4]  │ d[7]  │
//! dots16-23│ d[2]  │ d[5]  │ d[8]  │
//!          └───────┴───────┴───────┘
//! ```

use super::commands::{ESC, u16_le};

/// Bit image layouts for `ESC *`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitImageMode {
    /// 8 dots tall, single horizontal density
    #[default]
    Height8NormalWidth = 0x00,
    /// 8 dots tall, double horizontal density
    Height8HalfWidth = 0x01,
    /// 24 dots tall, single horizontal density
    Height24NormalWidth = 0x20,
    /// 24 dots tall, double horizontal density
    Height24HalfWidth = 0x21,
}

impl BitImageMode {
    /// Bytes that make up one vertical column of dots
    pub fn bytes_per_column(self) -> usize {
        match self {
            Self::Height8NormalWidth | Self::Height8HalfWidth => 1,
            Self::Height24NormalWidth | Self::Height24HalfWidth => 3,
        }
    }

    /// Number of dot columns described by `len` payload bytes
    ///
    /// Partial columns are dropped (integer division).
    pub fn columns(self, len: usize) -> usize {
        len / self.bytes_per_column()
    }
}

/// Largest payload the 16-bit `nL nH` field can describe
pub const MAX_BIT_IMAGE_BYTES: usize = 0xFFFF;

/// # Select Bit-Image Mode (ESC * m nL nH d1...dk)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * m nL nH d1...dk |
/// | Hex     | 1B 2A m nL nH d1...dk |
/// | Decimal | 27 42 m nL nH d1...dk |
///
/// ## Parameters
///
/// - `m`: Bit image mode (see [`BitImageMode`])
/// - `nL, nH`: Number of dot *columns*, little-endian
///   (`len / 3` for 24-dot modes, `len` for 8-dot modes)
/// - `d1...dk`: Column data, copied verbatim
///
/// The column count is truncated to 16 bits. Callers that need to know
/// whether the payload fits use [`BitImageMode::columns`] and
/// [`MAX_BIT_IMAGE_BYTES`] (the chain reports both as deferred errors).
///
/// ## Example
///
/// ```
/// use escchain::protocol::graphics::{bit_image, BitImageMode};
///
/// let cmd = bit_image(BitImageMode::Height24NormalWidth, &[0xFF; 6]);
/// assert_eq!(&cmd[..5], &[0x1B, 0x2A, 0x20, 0x02, 0x00]);
/// assert_eq!(cmd.len(), 5 + 6);
/// ```
pub fn bit_image(mode: BitImageMode, data: &[u8]) -> Vec<u8> {
    let columns = mode.columns(data.len()) as u16;

    let mut cmd = Vec::with_capacity(5 + data.len());
    cmd.push(ESC);
    cmd.push(b'*');
    cmd.push(mode as u8);
    cmd.extend(u16_le(columns));
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
