//! # Receipt Builders
//!
//! Pre-built receipt templates demonstrating ESC/POS capabilities.
//!
//! Each template returns a finished [`CommandChain`]; callers decide what to
//! do with its bytes and deferred errors. Layout widths come from the
//! [`PrinterConfig`] passed in.

use crate::chain::CommandChain;
use crate::printer::PrinterConfig;
use crate::protocol::barcode::{
    barcode1d::{BarcodeSystem, HriPosition},
    qr::QrErrorLevel,
};
use crate::protocol::commands::CutMode;
use crate::protocol::graphics::BitImageMode;
use crate::protocol::text::{Alignment, FontType, UnderlineMode};

/// Width of the showcase stripe image
const STRIPE_WIDTH_MM: f32 = 40.0;

// ============================================================================
// RECEIPT TEMPLATES
// ============================================================================

/// Short greeting with a centered double-size header
pub fn hello_receipt(config: &PrinterConfig) -> CommandChain {
    let mut chain = CommandChain::new();
    chain
        .reset_setting()
        .text_align(Alignment::Center)
        .letter_size(2, 2)
        .text("HELLO")
        .new_line()
        .letter_size(1, 1)
        .text(&divider(config.columns_font_a))
        .new_line()
        .text(config.model)
        .new_line()
        .print_and_line_feed(3)
        .feed_to_cut()
        .cut(CutMode::Partial);
    chain
}

/// Reset followed by a CODE39 barcode of "0123456789"
pub fn barcode_receipt(_config: &PrinterConfig) -> CommandChain {
    let mut chain = CommandChain::new();
    chain.reset_setting().print_barcode("0123456789");
    chain
}

/// Tour of text decoration, sizes, barcodes, QR and bit images
///
/// Features demonstrated:
/// - Print mode flags and individual style toggles
/// - Character sizes x1 to x3
/// - Tab stops and aligned line items
/// - CODE39 and CODE128 barcodes with HRI text
/// - QR code
/// - 24-dot bit image, 40mm wide on every profile
pub fn showcase_receipt(config: &PrinterConfig) -> CommandChain {
    let cols = config.columns_font_a as usize;
    let mut chain = CommandChain::new();

    // Header
    chain
        .reset_setting()
        .text_align(Alignment::Center)
        .decoration(false, true, true, true, false)
        .text("ESCCHAIN")
        .new_line()
        .decoration(false, false, false, false, false)
        .underlined(UnderlineMode::OneDot)
        .text("esc/pos showcase")
        .underlined(UnderlineMode::None)
        .new_line()
        .text(&divider(config.columns_font_a))
        .new_line();

    // Sizes
    chain.text_align(Alignment::Left);
    for n in 1..=3 {
        chain.letter_size(n, n).text(&format!("x{n}")).new_line();
    }
    chain.letter_size(1, 1);

    // Styles
    chain
        .bold(true)
        .text("bold")
        .bold(false)
        .tab()
        .double_strike(true)
        .text("double strike")
        .double_strike(false)
        .new_line()
        .reverse(true)
        .text(" reverse ")
        .reverse(false)
        .new_line()
        .upside_down(true)
        .text("upside down")
        .new_line()
        .upside_down(false)
        .set_font(FontType::B)
        .text("font B fits more characters on a line")
        .new_line()
        .text(&divider(config.columns_font_b))
        .new_line()
        .set_font(FontType::A);

    // Line items
    chain.tab_stops(&[8, 16, 24]).text(&divider(config.columns_font_a)).new_line();
    for (label, cents) in [("Espresso", 450), ("Croissant", 325), ("Paper roll", 1299)] {
        chain.text(&line_item(label, cents, cols)).new_line();
    }
    chain
        .bold(true)
        .text(&line_item("TOTAL", 2074, cols))
        .bold(false)
        .new_line()
        .print_and_feed(24);

    // Barcodes
    chain
        .text_align(Alignment::Center)
        .barcode_height(80)
        .barcode_width(2)
        .barcode_text(HriPosition::Below)
        .barcode_text_font(FontType::A)
        .print_barcode("0123456789")
        .new_line()
        .print_barcode_counted(BarcodeSystem::Code128, b"{BESC-2074")
        .new_line()
        .print_qr_code(6, QrErrorLevel::M, "https://example.com/r/2074")
        .new_line();

    // Bit image: single density, so one column covers two dots
    let columns = config.mm_to_dots(STRIPE_WIDTH_MM) / 2;
    chain
        .line_spacing(24)
        .bit_image(BitImageMode::Height24NormalWidth, &stripes(columns))
        .new_line()
        .default_line_spacing()
        .print_and_line_feed(2)
        .feed_to_cut()
        .cut(CutMode::Partial);

    chain
}

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// List available receipt templates
pub fn list_receipts() -> &'static [&'static str] {
    &["hello", "barcode", "showcase"]
}

/// Get a receipt chain by name
pub fn by_name(name: &str, config: &PrinterConfig) -> Option<CommandChain> {
    match name.to_lowercase().as_str() {
        "hello" => Some(hello_receipt(config)),
        "barcode" => Some(barcode_receipt(config)),
        "showcase" => Some(showcase_receipt(config)),
        _ => None,
    }
}

// ============================================================================
// LAYOUT HELPERS
// ============================================================================

fn divider(columns: u8) -> String {
    "-".repeat(columns as usize)
}

/// Label on the left, price on the right, padded to `columns`
fn line_item(label: &str, cents: u32, columns: usize) -> String {
    let price = format!("{}.{:02}", cents / 100, cents % 100);
    let pad = columns.saturating_sub(label.len() + price.len()).max(1);
    format!("{label}{}{price}", " ".repeat(pad))
}

/// Diagonal stripes, one 24-dot column per 3 bytes
fn stripes(columns: u16) -> Vec<u8> {
    let mut data = Vec::with_capacity(columns as usize * 3);
    for x in 0..columns {
        let band = 0xF0u8.rotate_right((x % 8) as u32);
        data.extend([band, band, band]);
    }
    data
}
