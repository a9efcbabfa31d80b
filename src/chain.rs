//! # Command Chain
//!
//! [`CommandChain`] accumulates the bytes of one print job. Each directive
//! method appends one command (built by the [`crate::protocol`] functions),
//! checks its parameters, and returns the chain so calls can be strung
//! together.
//!
//! ## Deferred Errors
//!
//! A parameter outside the range the printer accepts does not stop the
//! chain. The bytes are written anyway and a [`ChainError`] naming the
//! offending call is recorded. Inspect [`CommandChain::errors`] before
//! trusting that the buffer is fully conformant:
//!
//! ```
//! use escchain::CommandChain;
//!
//! let mut chain = CommandChain::new();
//! chain
//!     .reset_setting()
//!     .letter_size(9, 2) // out of range, recorded as call 2
//!     .text("TOTAL")
//!     .new_line();
//!
//! assert_eq!(chain.call_count(), 4);
//! assert_eq!(chain.errors().len(), 1);
//! assert_eq!(chain.errors()[0].call(), 2);
//! // All four directives were still written
//! assert_eq!(chain.bytes().len(), 2 + 3 + 5 + 1);
//! ```
//!
//! ## Ordering
//!
//! Nothing enforces directive order. Jobs conventionally start with
//! [`CommandChain::reset_setting`] so the printer is in a known state.

use tracing::{trace, warn};

use crate::error::{BitImageFault, ChainError};
use crate::protocol::barcode::{
    barcode1d::{self, BarcodeSystem, HriPosition},
    qr::{self, QrErrorLevel},
};
use crate::protocol::commands::{self, CutMode, HT, LF};
use crate::protocol::graphics::{self, BitImageMode, MAX_BIT_IMAGE_BYTES};
use crate::protocol::text::{
    self, Alignment, CharacterSet, Color, FontType, PrintMode, Rotation, UnderlineMode,
    MAX_MAGNIFICATION, MAX_TAB_STOPS, MIN_MAGNIFICATION,
};

/// Byte buffer plus deferred errors for one print job
///
/// ## Invariants
///
/// - `bytes()` only grows; earlier bytes are never rewritten
/// - every directive call increments `call_count()` by exactly one and
///   records at most one error, so `errors().len() <= call_count()`
/// - error ordinals are 1-based and in call order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandChain {
    buffer: Vec<u8>,
    errors: Vec<ChainError>,
    calls: usize,
}

impl CommandChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The bytes emitted so far
    ///
    /// Always a valid prefix of the final job, so it can be read at any time.
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Deferred errors, in call order
    pub fn errors(&self) -> &[ChainError] {
        &self.errors
    }

    /// Number of directive calls made, including invalid ones
    pub fn call_count(&self) -> usize {
        self.calls
    }

    /// `true` when no directive recorded an error
    pub fn is_conformant(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the chain, returning buffer and errors
    pub fn into_parts(self) -> (Vec<u8>, Vec<ChainError>) {
        (self.buffer, self.errors)
    }

    /// Consume the chain, returning only the buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Count a directive call and return its ordinal
    fn begin(&mut self, directive: &'static str) -> usize {
        self.calls += 1;
        trace!(call = self.calls, directive, "directive");
        self.calls
    }

    fn emit(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.buffer.extend_from_slice(bytes.as_ref());
        self
    }

    fn reject(&mut self, err: ChainError) {
        warn!(call = err.call(), "{err}");
        self.errors.push(err);
    }

    // ========================================================================
    // TEXT AND CONTROL PRIMITIVES
    // ========================================================================

    /// Append the raw bytes of `s`
    ///
    /// No escaping is done: text containing 0x1B, 0x1C or 0x1D will be read
    /// by the printer as a command.
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.begin("text");
        self.emit(s.as_bytes())
    }

    /// Append arbitrary bytes, for commands this chain does not model
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.begin("raw");
        self.emit(bytes)
    }

    /// Horizontal tab (HT)
    pub fn tab(&mut self) -> &mut Self {
        self.begin("tab");
        self.emit([HT])
    }

    /// Print and line feed (LF)
    pub fn new_line(&mut self) -> &mut Self {
        self.begin("new_line");
        self.emit([LF])
    }

    /// Print and feed `n` motion units (ESC J n)
    pub fn print_and_feed(&mut self, n: u8) -> &mut Self {
        self.begin("print_and_feed");
        self.emit(commands::print_and_feed(n))
    }

    /// Print and reverse feed `n` motion units (ESC K n)
    pub fn print_and_back_feed(&mut self, n: u8) -> &mut Self {
        self.begin("print_and_back_feed");
        self.emit(commands::print_and_back_feed(n))
    }

    /// Print and feed `n` lines (ESC d n)
    pub fn print_and_line_feed(&mut self, n: u8) -> &mut Self {
        self.begin("print_and_line_feed");
        self.emit(commands::print_and_line_feed(n))
    }

    /// Print and reverse feed `n` lines (ESC e n)
    pub fn print_and_back_line_feed(&mut self, n: u8) -> &mut Self {
        self.begin("print_and_back_line_feed");
        self.emit(commands::print_and_back_line_feed(n))
    }

    /// Initialize the printer (ESC @)
    pub fn reset_setting(&mut self) -> &mut Self {
        self.begin("reset_setting");
        self.emit(commands::init())
    }

    /// Move the print head to its standby position (ESC <)
    pub fn return_home(&mut self) -> &mut Self {
        self.begin("return_home");
        self.emit(commands::return_home())
    }

    /// Turn unidirectional printing on or off (ESC U n)
    pub fn unidirectional(&mut self, enabled: bool) -> &mut Self {
        self.begin("unidirectional");
        self.emit(commands::unidirectional(enabled))
    }

    /// Feed to the cutter (FS ( L, fn 66)
    pub fn feed_to_cut(&mut self) -> &mut Self {
        self.begin("feed_to_cut");
        self.emit(commands::feed_to_cut())
    }

    /// Cut the paper (GS V m)
    pub fn cut(&mut self, mode: CutMode) -> &mut Self {
        self.begin("cut");
        self.emit(commands::cut(mode))
    }

    // ========================================================================
    // TEXT DECORATION
    // ========================================================================

    /// Select print mode from five flags (ESC ! n)
    ///
    /// Flags map to bits 0 (font B), 3 (bold), 4 (double height),
    /// 5 (double width) and 7 (underline).
    pub fn decoration(
        &mut self,
        font_b: bool,
        bold: bool,
        double_height: bool,
        double_width: bool,
        underline: bool,
    ) -> &mut Self {
        let mode = PrintMode {
            font_b,
            bold,
            double_height,
            double_width,
            underline,
        };
        self.print_mode(mode)
    }

    /// Select print mode from a [`PrintMode`] (ESC ! n)
    pub fn print_mode(&mut self, mode: PrintMode) -> &mut Self {
        self.begin("print_mode");
        self.emit(text::print_mode(mode))
    }

    /// Emphasized mode (ESC E n)
    pub fn bold(&mut self, enabled: bool) -> &mut Self {
        self.begin("bold");
        self.emit(text::bold(enabled))
    }

    /// Double-strike mode (ESC G n)
    pub fn double_strike(&mut self, enabled: bool) -> &mut Self {
        self.begin("double_strike");
        self.emit(text::double_strike(enabled))
    }

    /// Underline mode (ESC - n)
    pub fn underlined(&mut self, mode: UnderlineMode) -> &mut Self {
        self.begin("underlined");
        self.emit(text::underline(mode))
    }

    /// 90° clockwise rotation (ESC V n)
    pub fn rotate_90(&mut self, rotation: Rotation) -> &mut Self {
        self.begin("rotate_90");
        self.emit(text::rotate_90(rotation))
    }

    /// Justification (ESC a n)
    pub fn text_align(&mut self, alignment: Alignment) -> &mut Self {
        self.begin("text_align");
        self.emit(text::align(alignment))
    }

    /// Upside-down mode (ESC { n)
    pub fn upside_down(&mut self, enabled: bool) -> &mut Self {
        self.begin("upside_down");
        self.emit(text::upside_down(enabled))
    }

    /// White/black reverse mode (GS B n)
    pub fn reverse(&mut self, enabled: bool) -> &mut Self {
        self.begin("reverse");
        self.emit(text::reverse(enabled))
    }

    /// Smoothing mode (GS b n)
    pub fn smoothing(&mut self, enabled: bool) -> &mut Self {
        self.begin("smoothing");
        self.emit(text::smoothing(enabled))
    }

    /// Character font (ESC M n)
    pub fn set_font(&mut self, font: FontType) -> &mut Self {
        self.begin("set_font");
        self.emit(text::font(font))
    }

    /// International character set (ESC R n)
    pub fn set_international(&mut self, set: CharacterSet) -> &mut Self {
        self.begin("set_international");
        self.emit(text::international(set))
    }

    /// Character code table (ESC t n)
    pub fn set_code_table(&mut self, page: u8) -> &mut Self {
        self.begin("set_code_table");
        self.emit(text::code_table(page))
    }

    /// Character color (GS ( N, fn 48)
    pub fn character_color(&mut self, color: Color) -> &mut Self {
        self.begin("character_color");
        self.emit(text::character_color(color))
    }

    /// Background color (GS ( N, fn 49)
    pub fn background_color(&mut self, color: Color) -> &mut Self {
        self.begin("background_color");
        self.emit(text::background_color(color))
    }

    /// Shading (GS ( N, fn 50)
    pub fn shadow(&mut self, enabled: bool, color: Color) -> &mut Self {
        self.begin("shadow");
        self.emit(text::shadow(enabled, color))
    }

    /// Character size (GS ! n)
    ///
    /// `height` and `width` must be in 1..=8. Out-of-range values record a
    /// [`ChainError::LetterSize`] and the size byte is still sent, with each
    /// multiplier masked to its nibble. For such values the byte differs from
    /// encoders that pack `(h-1)|(w-1)<<4` unmasked: `letter_size(0, 1)`
    /// sends `0x0F`, not `0xFF`.
    pub fn letter_size(&mut self, height: u8, width: u8) -> &mut Self {
        let call = self.begin("letter_size");

        let range = MIN_MAGNIFICATION..=MAX_MAGNIFICATION;
        if !range.contains(&height) || !range.contains(&width) {
            self.reject(ChainError::LetterSize {
                call,
                height,
                width,
            });
        }
        self.emit(text::size(height, width))
    }

    // ========================================================================
    // LAYOUT
    // ========================================================================

    /// Left margin in motion units (GS L nL nH)
    pub fn left_margin(&mut self, units: u16) -> &mut Self {
        self.begin("left_margin");
        self.emit(text::left_margin(units))
    }

    /// Absolute print position in motion units (ESC $ nL nH)
    pub fn absolute_position(&mut self, units: u16) -> &mut Self {
        self.begin("absolute_position");
        self.emit(text::absolute_position(units))
    }

    /// Relative print position in motion units (ESC \ nL nH)
    pub fn relative_position(&mut self, units: i16) -> &mut Self {
        self.begin("relative_position");
        self.emit(text::relative_position(units))
    }

    /// Move to the start of the line, printing or discarding it (GS T n)
    pub fn move_to_line_start(&mut self, print_buffer: bool) -> &mut Self {
        self.begin("move_to_line_start");
        self.emit(text::move_to_line_start(print_buffer))
    }

    /// Horizontal and vertical motion units (GS P x y)
    pub fn motion_units(&mut self, x: u8, y: u8) -> &mut Self {
        self.begin("motion_units");
        self.emit(text::motion_units(x, y))
    }

    /// Line spacing in motion units (ESC 3 n)
    pub fn line_spacing(&mut self, n: u8) -> &mut Self {
        self.begin("line_spacing");
        self.emit(text::line_spacing(n))
    }

    /// Restore the default line spacing (ESC 2)
    pub fn default_line_spacing(&mut self) -> &mut Self {
        self.begin("default_line_spacing");
        self.emit(text::default_line_spacing())
    }

    /// Right-side character spacing (ESC SP n)
    pub fn right_spacing(&mut self, n: u8) -> &mut Self {
        self.begin("right_spacing");
        self.emit(text::right_spacing(n))
    }

    /// Horizontal tab positions (ESC D n1...nk NUL)
    ///
    /// More than 32 positions records [`ChainError::TabStops`]; every
    /// position is still sent.
    pub fn tab_stops(&mut self, columns: &[u8]) -> &mut Self {
        let call = self.begin("tab_stops");

        if columns.len() > MAX_TAB_STOPS {
            self.reject(ChainError::TabStops {
                call,
                count: columns.len(),
            });
        }
        self.emit(text::tab_stops(columns))
    }

    // ========================================================================
    // BIT IMAGES
    // ========================================================================

    /// Column bit image (ESC * m nL nH d1...dk)
    ///
    /// Two independent checks are made and folded into one
    /// [`ChainError::BitImage`]:
    ///
    /// - 24-dot modes need a payload that is a multiple of 3
    /// - the payload must not exceed 65535 bytes
    ///
    /// The header and the full payload are emitted either way; the column
    /// count is `len / 3` in 24-dot modes and `len` in 8-dot modes.
    pub fn bit_image(&mut self, mode: BitImageMode, data: &[u8]) -> &mut Self {
        let call = self.begin("bit_image");

        let partial_column = data.len() % mode.bytes_per_column() != 0;
        let too_large = data.len() > MAX_BIT_IMAGE_BYTES;
        if let Some(fault) = BitImageFault::from_checks(partial_column, too_large) {
            self.reject(ChainError::BitImage {
                call,
                len: data.len(),
                fault,
            });
        }
        self.emit(graphics::bit_image(mode, data))
    }

    // ========================================================================
    // BARCODES
    // ========================================================================

    /// Barcode height in dots (GS h n)
    ///
    /// 0 records [`ChainError::BarcodeHeight`]; the byte is still sent.
    pub fn barcode_height(&mut self, dots: u8) -> &mut Self {
        let call = self.begin("barcode_height");

        if dots < 1 {
            self.reject(ChainError::BarcodeHeight { call });
        }
        self.emit(barcode1d::height(dots))
    }

    /// Barcode module width (GS w n)
    pub fn barcode_width(&mut self, n: u8) -> &mut Self {
        self.begin("barcode_width");
        self.emit(barcode1d::width(n))
    }

    /// HRI text position (GS H n)
    pub fn barcode_text(&mut self, position: HriPosition) -> &mut Self {
        self.begin("barcode_text");
        self.emit(barcode1d::hri_position(position))
    }

    /// HRI text font (GS f n)
    pub fn barcode_text_font(&mut self, font: FontType) -> &mut Self {
        self.begin("barcode_text_font");
        self.emit(barcode1d::hri_font(font))
    }

    /// CODE39 barcode, NUL-terminated (GS k 4 d1...dk NUL)
    pub fn print_barcode(&mut self, code: &str) -> &mut Self {
        self.begin("print_barcode");
        self.emit(barcode1d::print_terminated(code.as_bytes()))
    }

    /// Barcode of any supported symbology, length-prefixed (GS k m n d1...dn)
    ///
    /// Payloads over 255 bytes record [`ChainError::BarcodeTooLong`] and are
    /// sent with a truncated length byte.
    pub fn print_barcode_counted(&mut self, system: BarcodeSystem, data: &[u8]) -> &mut Self {
        let call = self.begin("print_barcode_counted");

        if data.len() > barcode1d::MAX_COUNTED_LEN {
            self.reject(ChainError::BarcodeTooLong {
                call,
                len: data.len(),
            });
        }
        self.emit(barcode1d::print_counted(system, data))
    }

    /// QR code as one directive
    ///
    /// Expands to five `GS ( k` frames: model 2, module size `dot_size`,
    /// error correction `level`, data store, print. The payload is not
    /// checked against the symbol's capacity.
    pub fn print_qr_code(&mut self, dot_size: u8, level: QrErrorLevel, data: &str) -> &mut Self {
        self.begin("print_qr_code");
        self.emit(qr::generate(data.as_bytes(), dot_size, level))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let chain = CommandChain::new();
        assert!(chain.bytes().is_empty());
        assert!(chain.errors().is_empty());
        assert_eq!(chain.call_count(), 0);
        assert!(chain.is_conformant());
    }

    #[test]
    fn test_reset_setting() {
        let mut chain = CommandChain::new();
        chain.reset_setting();
        assert_eq!(chain.bytes(), &[0x1B, 0x40]);
    }

    #[test]
    fn test_text_tab_new_line() {
        let mut chain = CommandChain::new();
        chain.text("A").tab().text("B").new_line();
        assert_eq!(chain.bytes(), b"A\tB\n");
        assert_eq!(chain.call_count(), 4);
    }

    #[test]
    fn test_feeds_accept_any_byte() {
        let mut chain = CommandChain::new();
        chain
            .print_and_feed(0)
            .print_and_back_feed(255)
            .print_and_line_feed(3)
            .print_and_back_line_feed(1);
        assert_eq!(
            chain.bytes(),
            &[
                0x1B, 0x4A, 0x00, //
                0x1B, 0x4B, 0xFF, //
                0x1B, 0x64, 0x03, //
                0x1B, 0x65, 0x01,
            ]
        );
        assert!(chain.is_conformant());
    }

    #[test]
    fn test_decoration_packs_bits() {
        let mut chain = CommandChain::new();
        chain.decoration(true, true, false, true, true);
        assert_eq!(chain.bytes(), &[0x1B, 0x21, 0b1010_1001]);

        let mut chain = CommandChain::new();
        chain.decoration(false, false, true, false, false);
        assert_eq!(chain.bytes(), &[0x1B, 0x21, 0x10]);
    }

    #[test]
    fn test_bold_off_emits_zero() {
        let mut chain = CommandChain::new();
        chain.bold(true).bold(false).double_strike(true).double_strike(false);
        assert_eq!(
            chain.bytes(),
            &[
                0x1B, 0x45, 0x01, 0x1B, 0x45, 0x00, //
                0x1B, 0x47, 0x01, 0x1B, 0x47, 0x00,
            ]
        );
    }

    #[test]
    fn test_letter_size_valid() {
        for h in 1..=8u8 {
            for w in 1..=8u8 {
                let mut chain = CommandChain::new();
                chain.letter_size(h, w);
                assert!(chain.is_conformant());
                assert_eq!(chain.bytes(), &[0x1D, 0x21, ((w - 1) << 4) | (h - 1)]);
            }
        }
    }

    #[test]
    fn test_letter_size_invalid_still_emits() {
        for (h, w) in [(0, 1), (1, 0), (9, 1), (1, 9), (0, 0), (255, 255)] {
            let mut chain = CommandChain::new();
            chain.letter_size(h, w);
            assert_eq!(chain.errors().len(), 1, "h={h} w={w}");
            assert_eq!(chain.errors()[0].call(), 1);
            assert_eq!(chain.bytes().len(), 3);
            assert_eq!(&chain.bytes()[..2], &[0x1D, 0x21]);
        }
    }

    #[test]
    fn test_letter_size_zero_height_stays_in_low_nibble() {
        let mut chain = CommandChain::new();
        chain.letter_size(0, 1);
        assert_eq!(chain.bytes(), &[0x1D, 0x21, 0x0F]);
    }

    #[test]
    fn test_error_names_ordinal() {
        let mut chain = CommandChain::new();
        chain
            .reset_setting()
            .text("x")
            .barcode_height(0)
            .barcode_height(80)
            .tab_stops(&[1; 33]);

        let calls: Vec<usize> = chain.errors().iter().map(ChainError::call).collect();
        assert_eq!(calls, vec![3, 5]);
        assert!(chain.errors()[0].to_string().starts_with("chain:3 "));
    }

    #[test]
    fn test_barcode_height_zero() {
        let mut chain = CommandChain::new();
        chain.barcode_height(0);
        assert_eq!(chain.errors(), &[ChainError::BarcodeHeight { call: 1 }]);
        assert_eq!(chain.bytes(), &[0x1D, 0x68, 0x00]);
    }

    #[test]
    fn test_tab_stops_limit() {
        let mut chain = CommandChain::new();
        chain.tab_stops(&[8; 32]);
        assert!(chain.is_conformant());

        let mut chain = CommandChain::new();
        let stops: Vec<u8> = (1..=33).collect();
        chain.tab_stops(&stops);
        assert_eq!(
            chain.errors(),
            &[ChainError::TabStops { call: 1, count: 33 }]
        );
        // All 33 positions plus prefix and NUL
        assert_eq!(chain.bytes().len(), 2 + 33 + 1);
        assert_eq!(*chain.bytes().last().unwrap(), 0x00);
    }

    #[test]
    fn test_bit_image_24_dot_partial_column() {
        let data = [0xFF; 7];
        let mut chain = CommandChain::new();
        chain.bit_image(BitImageMode::Height24NormalWidth, &data);

        assert_eq!(
            chain.errors(),
            &[ChainError::BitImage {
                call: 1,
                len: 7,
                fault: BitImageFault::PartialColumn,
            }]
        );
        assert_eq!(&chain.bytes()[..5], &[0x1B, 0x2A, 0x20, 2, 0]);
        assert_eq!(&chain.bytes()[5..], &data);
    }

    #[test]
    fn test_bit_image_8_dot_any_length() {
        let mut chain = CommandChain::new();
        chain.bit_image(BitImageMode::Height8NormalWidth, &[0x81; 7]);
        assert!(chain.is_conformant());
        assert_eq!(&chain.bytes()[..5], &[0x1B, 0x2A, 0x00, 7, 0]);
    }

    #[test]
    fn test_bit_image_too_large() {
        let data = vec![0u8; MAX_BIT_IMAGE_BYTES + 1];
        let mut chain = CommandChain::new();
        chain.bit_image(BitImageMode::Height8HalfWidth, &data);

        assert_eq!(chain.errors().len(), 1);
        assert!(matches!(
            chain.errors()[0],
            ChainError::BitImage {
                fault: BitImageFault::TooLarge,
                ..
            }
        ));
        assert_eq!(chain.bytes().len(), 5 + data.len());
    }

    #[test]
    fn test_bit_image_both_faults_one_error() {
        let data = vec![0u8; 65537];
        let mut chain = CommandChain::new();
        chain.bit_image(BitImageMode::Height24HalfWidth, &data);
        assert_eq!(chain.errors().len(), 1);
        assert!(matches!(
            chain.errors()[0],
            ChainError::BitImage {
                fault: BitImageFault::PartialColumnTooLarge,
                ..
            }
        ));
    }

    #[test]
    fn test_print_barcode() {
        let mut chain = CommandChain::new();
        chain.print_barcode("0123456789");

        let mut expected = vec![0x1D, b'k', 0x04];
        expected.extend(b"0123456789");
        expected.push(0x00);
        assert_eq!(chain.bytes(), expected.as_slice());
    }

    #[test]
    fn test_print_barcode_counted_too_long() {
        let data = vec![b'1'; 256];
        let mut chain = CommandChain::new();
        chain.print_barcode_counted(BarcodeSystem::Code93, &data);
        assert_eq!(
            chain.errors(),
            &[ChainError::BarcodeTooLong { call: 1, len: 256 }]
        );
        assert_eq!(&chain.bytes()[..4], &[0x1D, 0x6B, 72, 0x00]);
    }

    #[test]
    fn test_qr_code_is_one_call() {
        let mut chain = CommandChain::new();
        chain.print_qr_code(4, QrErrorLevel::L, "http://example.com");
        assert_eq!(chain.call_count(), 1);
        assert_eq!(
            chain.bytes(),
            qr::generate(b"http://example.com", 4, QrErrorLevel::L).as_slice()
        );
    }

    #[test]
    fn test_supplemental_directives() {
        let mut chain = CommandChain::new();
        chain
            .set_font(FontType::B)
            .set_international(CharacterSet::Japan)
            .set_code_table(1)
            .return_home()
            .unidirectional(true)
            .relative_position(-24)
            .move_to_line_start(false)
            .character_color(Color::Color2)
            .feed_to_cut()
            .cut(CutMode::Partial);
        assert_eq!(chain.call_count(), 10);
        assert!(chain.bytes().ends_with(&[
            0x1C, 0x28, 0x4C, 0x02, 0x00, 0x42, 0x30, //
            0x1D, 0x56, 0x01,
        ]));
    }

    #[test]
    fn test_into_parts() {
        let mut chain = CommandChain::new();
        chain.letter_size(0, 0).new_line();
        let (bytes, errors) = chain.into_parts();
        assert_eq!(bytes.len(), 4);
        assert_eq!(errors.len(), 1);
    }
}
