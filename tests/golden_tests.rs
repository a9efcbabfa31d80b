//! # Golden Tests
//!
//! These tests pin the exact bytes produced for the built-in receipts and
//! for representative directive sequences, and check the chain's accounting
//! rules across whole jobs.
//!
//! ## Test Coverage
//!
//! - **Receipts**: byte-exact output of `barcode` and `hello`, structural
//!   checks of `showcase` on every printer profile.
//! - **Chain properties**: determinism, concatenation, error bounds and
//!   ordinals.

use escchain::protocol::barcode::barcode1d::BarcodeSystem;
use escchain::protocol::barcode::qr::QrErrorLevel;
use escchain::protocol::commands::CutMode;
use escchain::protocol::graphics::BitImageMode;
use escchain::protocol::text::{Alignment, UnderlineMode};
use escchain::{ChainError, CommandChain, PrinterConfig, receipt};
use pretty_assertions::assert_eq;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Parse a whitespace-separated hex string
fn hex(s: &str) -> Vec<u8> {
    s.split_whitespace()
        .map(|b| u8::from_str_radix(b, 16).unwrap())
        .collect()
}

/// A mixed job that touches every directive family, with two bad calls
fn mixed_job(chain: &mut CommandChain) {
    chain
        .reset_setting()
        .text_align(Alignment::Center)
        .letter_size(0, 3)
        .text("MIXED")
        .new_line()
        .underlined(UnderlineMode::TwoDot)
        .decoration(true, false, true, false, true)
        .tab_stops(&[4, 8])
        .tab()
        .bit_image(BitImageMode::Height24HalfWidth, &[0xFF; 10])
        .barcode_height(50)
        .print_barcode("ABC")
        .print_qr_code(3, QrErrorLevel::H, "mixed")
        .print_and_line_feed(2);
}

// ============================================================================
// RECEIPTS
// ============================================================================

#[test]
fn golden_barcode_receipt() {
    let chain = receipt::by_name("barcode", &PrinterConfig::default()).unwrap();

    assert_eq!(
        chain.bytes(),
        hex("1b 40  1d 6b 04 30 31 32 33 34 35 36 37 38 39 00").as_slice()
    );
    assert_eq!(chain.call_count(), 2);
    assert!(chain.is_conformant());
}

#[test]
fn golden_hello_receipt() {
    let chain = receipt::by_name("hello", &PrinterConfig::TM_T88).unwrap();

    let mut expected = hex("1b 40  1b 61 01  1d 21 11");
    expected.extend(b"HELLO\n");
    expected.extend(hex("1d 21 00"));
    expected.extend([b'-'; 48]);
    expected.push(b'\n');
    expected.extend(b"Epson TM-T88\n");
    expected.extend(hex("1b 64 03  1c 28 4c 02 00 42 30  1d 56 01"));

    assert_eq!(chain.bytes(), expected.as_slice());
}

#[test]
fn golden_showcase_is_conformant_on_all_profiles() {
    for config in PrinterConfig::ALL {
        let chain = receipt::by_name("showcase", &config).unwrap();
        assert!(chain.is_conformant(), "{}", config.name);
        assert!(chain.bytes().starts_with(&[0x1B, 0x40]));
        assert!(chain.bytes().ends_with(&[0x1D, 0x56, 0x01]));
    }
}

#[test]
fn golden_showcase_bit_image_is_40mm() {
    let config = PrinterConfig::TM_M10;
    let chain = receipt::by_name("showcase", &config).unwrap();

    // 40mm at 203 DPI = 320 dots, single density = 160 columns = 0x00A0
    let header = [0x1B, 0x2A, 0x20, 0xA0, 0x00];
    let pos = chain
        .bytes()
        .windows(5)
        .position(|w| w == header)
        .expect("bit image header");
    assert!(chain.bytes().len() >= pos + 5 + 160 * 3);
}

// ============================================================================
// QR FRAMES
// ============================================================================

#[test]
fn golden_qr_code_frames() {
    let mut chain = CommandChain::new();
    chain.print_qr_code(4, QrErrorLevel::L, "http://example.com");

    let mut expected = hex(
        "1d 28 6b 04 00 31 41 32 00 \
         1d 28 6b 03 00 31 43 04 \
         1d 28 6b 03 00 31 45 30 \
         1d 28 6b 15 00 31 50 30",
    );
    expected.extend(b"http://example.com");
    expected.extend(hex("1d 28 6b 03 00 31 51 30"));

    assert_eq!(chain.bytes(), expected.as_slice());
    assert_eq!(chain.call_count(), 1);
}

#[test]
fn golden_qr_store_length_crosses_byte_boundary() {
    let data = "x".repeat(300);
    let mut chain = CommandChain::new();
    chain.print_qr_code(8, QrErrorLevel::Q, &data);

    // 300 + 3 = 303 = 0x012F
    let store = [0x1D, 0x28, 0x6B, 0x2F, 0x01, 0x31, 0x50, 0x30];
    assert!(chain.bytes().windows(8).any(|w| w == store));
}

// ============================================================================
// CHAIN PROPERTIES
// ============================================================================

#[test]
fn property_same_calls_same_output() {
    let mut a = CommandChain::new();
    let mut b = CommandChain::new();
    mixed_job(&mut a);
    mixed_job(&mut b);

    assert_eq!(a, b);
}

#[test]
fn property_bytes_concatenate() {
    let mut whole = CommandChain::new();
    mixed_job(&mut whole);
    mixed_job(&mut whole);

    let mut half = CommandChain::new();
    mixed_job(&mut half);
    let mut expected = half.bytes().to_vec();
    expected.extend_from_slice(half.bytes());

    assert_eq!(whole.bytes(), expected.as_slice());
    assert_eq!(whole.call_count(), half.call_count() * 2);
}

/// Layout and barcode directives with a bad tab-stop list and barcode height
fn barcode_job(chain: &mut CommandChain) {
    chain
        .left_margin(32)
        .tab_stops(&[2; 40])
        .barcode_width(3)
        .barcode_height(0)
        .print_barcode_counted(BarcodeSystem::Ean13, b"4006381333931")
        .cut(CutMode::Full);
}

#[test]
fn property_different_jobs_concatenate() {
    let mut a = CommandChain::new();
    mixed_job(&mut a);
    let mut b = CommandChain::new();
    barcode_job(&mut b);

    let mut joined = CommandChain::new();
    mixed_job(&mut joined);
    barcode_job(&mut joined);

    let mut expected = a.bytes().to_vec();
    expected.extend_from_slice(b.bytes());
    assert_eq!(joined.bytes(), expected.as_slice());
    assert_eq!(joined.call_count(), a.call_count() + b.call_count());

    // B's ordinals shift by A's call count
    let shifted: Vec<usize> = b
        .errors()
        .iter()
        .map(|e| e.call() + a.call_count())
        .collect();
    let joined_calls: Vec<usize> = joined.errors().iter().map(ChainError::call).collect();
    let mut expected_calls: Vec<usize> = a.errors().iter().map(ChainError::call).collect();
    expected_calls.extend(shifted);
    assert_eq!(joined_calls, expected_calls);
    assert_eq!(joined_calls, vec![3, 10, 16, 18]);

    for err in joined.errors() {
        assert!(err.call() >= 1 && err.call() <= joined.call_count(), "{err}");
    }
}

#[test]
fn property_errors_bounded_by_calls() {
    let mut chain = CommandChain::new();
    for n in 0..=20u8 {
        chain.letter_size(n, 20 - n);
        chain.barcode_height(n % 3);
        chain.bit_image(BitImageMode::Height24NormalWidth, &vec![0; n as usize]);
        assert!(chain.errors().len() <= chain.call_count());
    }
    for err in chain.errors() {
        assert!((1..=chain.call_count()).contains(&err.call()), "{err}");
    }
    // Every call here was in error at most once, so ordinals are unique
    let mut calls: Vec<usize> = chain.errors().iter().map(ChainError::call).collect();
    let before = calls.len();
    calls.dedup();
    assert_eq!(calls.len(), before);
}

#[test]
fn property_invalid_calls_are_still_emitted() {
    let mut valid = CommandChain::new();
    valid.letter_size(1, 1).barcode_height(1);
    let mut invalid = CommandChain::new();
    invalid.letter_size(9, 9).barcode_height(0);

    assert_eq!(valid.bytes().len(), invalid.bytes().len());
    assert_eq!(invalid.errors().len(), 2);
}

#[test]
fn property_error_ordinals_in_mixed_job() {
    let mut chain = CommandChain::new();
    mixed_job(&mut chain);

    // letter_size(0, 3) is call 3, the 10-byte 24-dot image is call 10
    let calls: Vec<usize> = chain.errors().iter().map(ChainError::call).collect();
    assert_eq!(calls, vec![3, 10]);
    assert_eq!(
        chain.errors()[0].to_string(),
        "chain:3 letter size 0x3 is outside x1-x8"
    );
}

#[test]
fn property_reset_is_exact() {
    let mut chain = CommandChain::new();
    chain.reset_setting();
    assert_eq!(chain.into_bytes(), vec![0x1B, 0x40]);
}
