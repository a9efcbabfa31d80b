//! # ESC/POS Text Styling and Layout Commands
//!
//! This module implements character decoration, character size and
//! horizontal/vertical layout commands.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Print mode | ESC ! n | Font, bold, double height/width, underline in one byte |
//! | Underline | ESC - n | 1-dot or 2-dot underline |
//! | Emphasis | ESC E n | **Bold** text |
//! | Double strike | ESC G n | Each line printed twice |
//! | Rotation | ESC V n | 90° clockwise rotation |
//! | Upside down | ESC { n | 180° rotation |
//! | Reverse | GS B n | White on black |
//! | Smoothing | GS b n | Smoothed edges for enlarged characters |
//! | Size | GS ! n | 1-8x width and height |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use super::commands::{ESC, GS, NUL, u16_le};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0x00,
    Center = 0x01,
    Right = 0x02,
}

/// # Select Justification (ESC a n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Behavior
///
/// - Only takes effect when issued at the beginning of a line
/// - Applies to text, bit images, barcodes and 2D symbols
/// - Reset by ESC @ (initialize)
///
/// ## Example
///
/// ```
/// use escchain::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Character fonts
///
/// Fonts A-E are model dependent; the "special" fonts select the
/// alternative character sets available on some TM models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontType {
    /// Font A: 12×24 dots on most 80mm models
    #[default]
    A = 0x00,
    /// Font B: 9×17 dots
    B = 0x01,
    C = 0x02,
    D = 0x03,
    E = 0x04,
    SpecialA = 0x61,
    SpecialB = 0x62,
}

/// # Select Character Font (ESC M n)
///
/// | Format | Bytes |
/// |--------|-------|
/// | Hex    | 1B 4D n |
///
/// ## Example
///
/// ```
/// use escchain::protocol::text::{font, FontType};
///
/// assert_eq!(font(FontType::B), vec![0x1B, 0x4D, 0x01]);
/// ```
pub fn font(font: FontType) -> Vec<u8> {
    vec![ESC, b'M', font as u8]
}

/// International character sets for `ESC R`
///
/// Each set replaces a handful of ASCII code points (`#`, `$`, `@`, `[`, ...)
/// with national characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterSet {
    #[default]
    America = 0x00,
    France = 0x01,
    Germany = 0x02,
    UnitedKingdom = 0x03,
    Denmark = 0x04,
    Sweden = 0x05,
    Italy = 0x06,
    Spain = 0x07,
    Japan = 0x08,
    Norway = 0x09,
    Korea = 0x0D,
    Slovenia = 0x0E,
    China = 0x0F,
    Vietnam = 0x10,
    Arabia = 0x11,
}

/// # Select International Character Set (ESC R n)
pub fn international(set: CharacterSet) -> Vec<u8> {
    vec![ESC, b'R', set as u8]
}

/// # Select Character Code Table (ESC t n)
///
/// Selects the code page used for bytes 0x80-0xFF. Page numbers are model
/// specific (0 = PC437, 16 = WPC1252, ...), so the raw page is taken as-is.
pub fn code_table(page: u8) -> Vec<u8> {
    vec![ESC, b't', page]
}

// ============================================================================
// PRINT MODE (ESC !)
// ============================================================================

/// Bit 0: font B instead of font A
pub const MODE_FONT_B: u8 = 1 << 0;
/// Bit 3: emphasized
pub const MODE_EMPHASIZED: u8 = 1 << 3;
/// Bit 4: double height
pub const MODE_DOUBLE_HEIGHT: u8 = 1 << 4;
/// Bit 5: double width
pub const MODE_DOUBLE_WIDTH: u8 = 1 << 5;
/// Bit 7: underline
pub const MODE_UNDERLINE: u8 = 1 << 7;

/// Flags packed into the `ESC !` print mode byte
///
/// ## Bit Layout
///
/// ```text
/// bit:  7   6   5   4   3   2   1   0
///       U   -   DW  DH  E   -   -   F
/// ```
///
/// Bits 1, 2 and 6 are reserved and always sent as zero.
///
/// ## Example
///
/// ```
/// use escchain::protocol::text::PrintMode;
///
/// let mode = PrintMode::new().bold(true).double_width(true);
/// assert_eq!(mode.to_byte(), 0b0010_1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintMode {
    pub font_b: bool,
    pub bold: bool,
    pub double_height: bool,
    pub double_width: bool,
    pub underline: bool,
}

impl PrintMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_b(mut self, enabled: bool) -> Self {
        self.font_b = enabled;
        self
    }

    pub fn bold(mut self, enabled: bool) -> Self {
        self.bold = enabled;
        self
    }

    pub fn double_height(mut self, enabled: bool) -> Self {
        self.double_height = enabled;
        self
    }

    pub fn double_width(mut self, enabled: bool) -> Self {
        self.double_width = enabled;
        self
    }

    pub fn underline(mut self, enabled: bool) -> Self {
        self.underline = enabled;
        self
    }

    /// Pack the flags into the mode byte
    pub fn to_byte(self) -> u8 {
        let mut n = 0;
        if self.font_b {
            n |= MODE_FONT_B;
        }
        if self.bold {
            n |= MODE_EMPHASIZED;
        }
        if self.double_height {
            n |= MODE_DOUBLE_HEIGHT;
        }
        if self.double_width {
            n |= MODE_DOUBLE_WIDTH;
        }
        if self.underline {
            n |= MODE_UNDERLINE;
        }
        n
    }
}

/// # Select Print Mode (ESC ! n)
///
/// Sets font, emphasis, double height, double width and underline in a
/// single command.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
/// | Decimal | 27 33 n |
///
/// ## Notes
///
/// - Overrides previous `ESC E`, `ESC -` and `GS !` settings for the bits
///   it covers
/// - When both `ESC !` and `GS !` select a size, the last one received wins
pub fn print_mode(mode: PrintMode) -> Vec<u8> {
    vec![ESC, b'!', mode.to_byte()]
}

// ============================================================================
// CHARACTER DECORATION
// ============================================================================

/// Underline thickness for `ESC -`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlineMode {
    #[default]
    None = 0x00,
    OneDot = 0x01,
    TwoDot = 0x02,
}

/// # Turn Underline Mode On/Off (ESC - n)
///
/// | Format | Bytes |
/// |--------|-------|
/// | Hex    | 1B 2D n |
///
/// Underlining is not applied to the space added by `ESC SP` or to
/// characters rotated 90° with `ESC V`.
pub fn underline(mode: UnderlineMode) -> Vec<u8> {
    vec![ESC, b'-', mode as u8]
}

/// # Turn Emphasized Mode On/Off (ESC E n)
///
/// ## Example
///
/// ```
/// use escchain::protocol::text::bold;
///
/// assert_eq!(bold(true), vec![0x1B, 0x45, 0x01]);
/// assert_eq!(bold(false), vec![0x1B, 0x45, 0x00]);
/// ```
pub fn bold(enabled: bool) -> Vec<u8> {
    vec![ESC, b'E', enabled as u8]
}

/// # Turn Double-Strike Mode On/Off (ESC G n)
///
/// On thermal printers this prints identically to emphasized mode.
pub fn double_strike(enabled: bool) -> Vec<u8> {
    vec![ESC, b'G', enabled as u8]
}

/// 90° clockwise rotation modes for `ESC V`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Rotation off
    #[default]
    Off = 0x00,
    /// Rotated, 1-dot character spacing
    OneDotSpacing = 0x01,
    /// Rotated, 1.5-dot character spacing
    OneAndHalfDotSpacing = 0x02,
}

/// # Turn 90° Clockwise Rotation On/Off (ESC V n)
pub fn rotate_90(rotation: Rotation) -> Vec<u8> {
    vec![ESC, b'V', rotation as u8]
}

/// # Turn Upside-Down Print Mode On/Off (ESC { n)
///
/// Only effective at the beginning of a line. The whole line is rotated
/// 180°, so text reads correctly when the receipt is turned around.
pub fn upside_down(enabled: bool) -> Vec<u8> {
    vec![ESC, b'{', enabled as u8]
}

/// # Turn White/Black Reverse Print Mode On/Off (GS B n)
pub fn reverse(enabled: bool) -> Vec<u8> {
    vec![GS, b'B', enabled as u8]
}

/// # Turn Smoothing Mode On/Off (GS b n)
///
/// Smooths the staircase edges of characters printed at 4x size and up.
pub fn smoothing(enabled: bool) -> Vec<u8> {
    vec![GS, b'b', enabled as u8]
}

// ============================================================================
// CHARACTER SIZE (GS !)
// ============================================================================

/// Smallest character magnification accepted by `GS !`
pub const MIN_MAGNIFICATION: u8 = 1;

/// Largest character magnification accepted by `GS !`
pub const MAX_MAGNIFICATION: u8 = 8;

/// Pack height/width multipliers into the `GS !` size byte
///
/// The width multiplier lives in the high nibble and the height multiplier
/// in the low nibble, both stored as `multiplier - 1`:
///
/// ```text
/// n = ((width - 1) << 4) | (height - 1)
/// ```
///
/// Out-of-range multipliers are masked to their nibble so they never
/// overwrite the other half of the byte.
///
/// ## Example
///
/// ```
/// use escchain::protocol::text::size_byte;
///
/// assert_eq!(size_byte(1, 1), 0x00);
/// assert_eq!(size_byte(2, 3), 0x21);
/// assert_eq!(size_byte(8, 8), 0x77);
/// ```
pub fn size_byte(height: u8, width: u8) -> u8 {
    let h = height.wrapping_sub(1) & 0x0F;
    let w = width.wrapping_sub(1) & 0x0F;
    (w << 4) | h
}

/// # Select Character Size (GS ! n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
/// | Decimal | 29 33 n |
///
/// ## Parameters
///
/// - `height`: Vertical magnification (1-8)
/// - `width`: Horizontal magnification (1-8)
///
/// No clamping happens here; validation is the caller's concern (see
/// [`crate::CommandChain::letter_size`]).
pub fn size(height: u8, width: u8) -> Vec<u8> {
    vec![GS, b'!', size_byte(height, width)]
}

// ============================================================================
// HORIZONTAL LAYOUT
// ============================================================================

/// # Set Right-Side Character Spacing (ESC SP n)
///
/// Adds `n` horizontal motion units to the right of every character.
pub fn right_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b' ', n]
}

/// # Set Left Margin (GS L nL nH)
///
/// | Format | Bytes |
/// |--------|-------|
/// | Hex    | 1D 4C nL nH |
///
/// The margin is `(nL + nH × 256)` horizontal motion units from the left
/// edge of the printable area.
pub fn left_margin(units: u16) -> Vec<u8> {
    let mut cmd = vec![GS, b'L'];
    cmd.extend(u16_le(units));
    cmd
}

/// # Set Absolute Print Position (ESC $ nL nH)
///
/// Moves the print position to `(nL + nH × 256)` motion units from the
/// beginning of the line. Positions past the right edge are ignored by the
/// printer.
pub fn absolute_position(units: u16) -> Vec<u8> {
    let mut cmd = vec![ESC, b'$'];
    cmd.extend(u16_le(units));
    cmd
}

/// # Set Relative Print Position (ESC \ nL nH)
///
/// Negative offsets move left; they are sent as 16-bit two's complement.
pub fn relative_position(units: i16) -> Vec<u8> {
    let mut cmd = vec![ESC, b'\\'];
    cmd.extend(units.to_le_bytes());
    cmd
}

/// Maximum number of horizontal tab positions accepted by `ESC D`
pub const MAX_TAB_STOPS: usize = 32;

/// # Set Horizontal Tab Positions (ESC D n1 ... nk NUL)
///
/// | Format | Bytes |
/// |--------|-------|
/// | Hex    | 1B 44 n1 ... nk 00 |
///
/// Each `n` is a column in character widths, in ascending order. An empty
/// list (`ESC D NUL`) clears all tab positions.
pub fn tab_stops(columns: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(columns.len() + 3);
    cmd.extend([ESC, b'D']);
    cmd.extend_from_slice(columns);
    cmd.push(NUL);
    cmd
}

/// # Move Print Position to Beginning of Line (GS T n)
///
/// With `print_buffer` the pending line is printed first; otherwise it is
/// discarded.
pub fn move_to_line_start(print_buffer: bool) -> Vec<u8> {
    vec![GS, b'T', print_buffer as u8]
}

/// # Set Horizontal and Vertical Motion Units (GS P x y)
///
/// Motion units are `1/x` inch horizontally and `1/y` inch vertically.
/// 0 restores the model default for that direction.
pub fn motion_units(x: u8, y: u8) -> Vec<u8> {
    vec![GS, b'P', x, y]
}

// ============================================================================
// LINE SPACING
// ============================================================================

/// # Select Default Line Spacing (ESC 2)
///
/// Restores the default spacing (about 1/6 inch, 30 dots at 180 dpi).
pub fn default_line_spacing() -> Vec<u8> {
    vec![ESC, b'2']
}

/// # Set Line Spacing (ESC 3 n)
///
/// Spacing is `n` vertical motion units.
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

// ============================================================================
// CHARACTER EFFECTS (GS ( N)
// ============================================================================

/// Print colors for `GS ( N`
///
/// `None` is only meaningful for the background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    None = 48,
    #[default]
    Color1 = 49,
    Color2 = 50,
    Color3 = 51,
}

fn character_effect(function: u8, params: &[u8]) -> Vec<u8> {
    let mut cmd = vec![GS, b'(', b'N'];
    cmd.extend(u16_le(params.len() as u16 + 1));
    cmd.push(function);
    cmd.extend_from_slice(params);
    cmd
}

/// # Select Character Color (GS ( N pL pH fn=48 m)
///
/// | Format | Bytes |
/// |--------|-------|
/// | Hex    | 1D 28 4E 02 00 30 m |
pub fn character_color(color: Color) -> Vec<u8> {
    character_effect(48, &[color as u8])
}

/// # Select Background Color (GS ( N pL pH fn=49 m)
pub fn background_color(color: Color) -> Vec<u8> {
    character_effect(49, &[color as u8])
}

/// # Turn Shading Mode On/Off (GS ( N pL pH fn=50 m a)
///
/// `m` toggles the shadow, `a` selects its color.
pub fn shadow(enabled: bool, color: Color) -> Vec<u8> {
    character_effect(50, &[enabled as u8, color as u8])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
        assert_eq!(align(Alignment::Right), vec![0x1B, 0x61, 0x02]);
    }

    #[test]
    fn test_font() {
        assert_eq!(font(FontType::A), vec![0x1B, 0x4D, 0x00]);
        assert_eq!(font(FontType::E), vec![0x1B, 0x4D, 0x04]);
        assert_eq!(font(FontType::SpecialA), vec![0x1B, 0x4D, 0x61]);
        assert_eq!(font(FontType::SpecialB), vec![0x1B, 0x4D, 0x62]);
    }

    #[test]
    fn test_international_and_code_table() {
        assert_eq!(international(CharacterSet::Japan), vec![0x1B, 0x52, 0x08]);
        assert_eq!(international(CharacterSet::Arabia), vec![0x1B, 0x52, 0x11]);
        assert_eq!(code_table(16), vec![0x1B, 0x74, 0x10]);
    }

    #[test]
    fn test_print_mode_bits() {
        assert_eq!(PrintMode::new().to_byte(), 0x00);
        assert_eq!(PrintMode::new().font_b(true).to_byte(), 0x01);
        assert_eq!(PrintMode::new().bold(true).to_byte(), 0x08);
        assert_eq!(PrintMode::new().double_height(true).to_byte(), 0x10);
        assert_eq!(PrintMode::new().double_width(true).to_byte(), 0x20);
        assert_eq!(PrintMode::new().underline(true).to_byte(), 0x80);

        let all = PrintMode::new()
            .font_b(true)
            .bold(true)
            .double_height(true)
            .double_width(true)
            .underline(true);
        // Reserved bits 1, 2, 6 stay clear
        assert_eq!(all.to_byte(), 0b1011_1001);
        assert_eq!(print_mode(all), vec![0x1B, 0x21, 0xB9]);
    }

    #[test]
    fn test_underline() {
        assert_eq!(underline(UnderlineMode::None), vec![0x1B, 0x2D, 0x00]);
        assert_eq!(underline(UnderlineMode::OneDot), vec![0x1B, 0x2D, 0x01]);
        assert_eq!(underline(UnderlineMode::TwoDot), vec![0x1B, 0x2D, 0x02]);
    }

    #[test]
    fn test_bold_and_double_strike_toggle() {
        assert_eq!(bold(true), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold(false), vec![0x1B, 0x45, 0x00]);
        assert_eq!(double_strike(true), vec![0x1B, 0x47, 0x01]);
        assert_eq!(double_strike(false), vec![0x1B, 0x47, 0x00]);
    }

    #[test]
    fn test_rotation_and_toggles() {
        assert_eq!(rotate_90(Rotation::Off), vec![0x1B, 0x56, 0x00]);
        assert_eq!(
            rotate_90(Rotation::OneAndHalfDotSpacing),
            vec![0x1B, 0x56, 0x02]
        );
        assert_eq!(upside_down(true), vec![0x1B, 0x7B, 0x01]);
        assert_eq!(reverse(true), vec![0x1D, 0x42, 0x01]);
        assert_eq!(reverse(false), vec![0x1D, 0x42, 0x00]);
        assert_eq!(smoothing(true), vec![0x1D, 0x62, 0x01]);
    }

    #[test]
    fn test_size_byte() {
        for h in 1..=8u8 {
            for w in 1..=8u8 {
                assert_eq!(size_byte(h, w), ((w - 1) << 4) | (h - 1));
            }
        }
        assert_eq!(size(3, 2), vec![0x1D, 0x21, 0x12]);
    }

    #[test]
    fn test_size_byte_out_of_range_stays_in_nibble() {
        // height 0 wraps to 0xF in the low nibble only
        assert_eq!(size_byte(0, 1), 0x0F);
        assert_eq!(size_byte(1, 0), 0xF0);
        assert_eq!(size_byte(9, 1), 0x08);
    }

    #[test]
    fn test_positions() {
        assert_eq!(left_margin(0x0140), vec![0x1D, 0x4C, 0x40, 0x01]);
        assert_eq!(absolute_position(300), vec![0x1B, 0x24, 0x2C, 0x01]);
        assert_eq!(relative_position(-1), vec![0x1B, 0x5C, 0xFF, 0xFF]);
        assert_eq!(relative_position(24), vec![0x1B, 0x5C, 0x18, 0x00]);
        assert_eq!(motion_units(180, 90), vec![0x1D, 0x50, 180, 90]);
        assert_eq!(move_to_line_start(true), vec![0x1D, 0x54, 0x01]);
    }

    #[test]
    fn test_tab_stops() {
        assert_eq!(tab_stops(&[8, 16, 24]), vec![0x1B, 0x44, 8, 16, 24, 0x00]);
        assert_eq!(tab_stops(&[]), vec![0x1B, 0x44, 0x00]);
    }

    #[test]
    fn test_line_spacing() {
        assert_eq!(default_line_spacing(), vec![0x1B, 0x32]);
        assert_eq!(line_spacing(60), vec![0x1B, 0x33, 60]);
        assert_eq!(right_spacing(2), vec![0x1B, 0x20, 2]);
    }

    #[test]
    fn test_character_effects() {
        assert_eq!(
            character_color(Color::Color2),
            vec![0x1D, 0x28, 0x4E, 0x02, 0x00, 0x30, 0x32]
        );
        assert_eq!(
            background_color(Color::None),
            vec![0x1D, 0x28, 0x4E, 0x02, 0x00, 0x31, 0x30]
        );
        assert_eq!(
            shadow(true, Color::Color1),
            vec![0x1D, 0x28, 0x4E, 0x03, 0x00, 0x32, 0x01, 0x31]
        );
    }
}
