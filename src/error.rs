//! # Error Types
//!
//! Two kinds of failure exist in this crate:
//!
//! - [`ChainError`]: a directive parameter outside the range the printer
//!   accepts. These are *deferred*: the chain records them and keeps
//!   emitting bytes.
//! - [`EscchainError`]: I/O and reporting failures in the glue around the
//!   encoder (device transport, CLI output).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A parameter-range violation recorded by [`crate::CommandChain`]
///
/// Each variant carries `call`, the 1-based ordinal of the directive that
/// produced it. A directive records at most one error, so problems found in
/// the same call are folded into one variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("chain:{call} letter size {height}x{width} is outside x1-x8")]
    LetterSize { call: usize, height: u8, width: u8 },

    #[error("chain:{call} {count} tab stops given, at most 32 are allowed")]
    TabStops { call: usize, count: usize },

    #[error("chain:{call} bit image of {len} bytes {fault}")]
    BitImage {
        call: usize,
        len: usize,
        fault: BitImageFault,
    },

    #[error("chain:{call} barcode height must be at least 1 dot")]
    BarcodeHeight { call: usize },

    #[error("chain:{call} counted barcode of {len} bytes exceeds 255 bytes")]
    BarcodeTooLong { call: usize, len: usize },
}

impl ChainError {
    /// Ordinal of the directive call that produced this error
    pub fn call(&self) -> usize {
        match *self {
            Self::LetterSize { call, .. }
            | Self::TabStops { call, .. }
            | Self::BitImage { call, .. }
            | Self::BarcodeHeight { call }
            | Self::BarcodeTooLong { call, .. } => call,
        }
    }

    /// Flatten into the serializable form used by `--json` reports
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            call: self.call(),
            message: self.to_string(),
        }
    }
}

/// What is wrong with a bit image payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitImageFault {
    /// 24-dot mode with a length that is not a multiple of 3
    PartialColumn,
    /// More than 65535 bytes
    TooLarge,
    /// Both of the above
    PartialColumnTooLarge,
}

impl BitImageFault {
    /// Combine the two independent checks; `None` when both pass
    pub fn from_checks(partial_column: bool, too_large: bool) -> Option<Self> {
        match (partial_column, too_large) {
            (false, false) => None,
            (true, false) => Some(Self::PartialColumn),
            (false, true) => Some(Self::TooLarge),
            (true, true) => Some(Self::PartialColumnTooLarge),
        }
    }
}

impl fmt::Display for BitImageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PARTIAL: &str = "is not a multiple of 3 in 24-dot mode";
        const LARGE: &str = "exceeds 65535 bytes";
        match self {
            Self::PartialColumn => f.write_str(PARTIAL),
            Self::TooLarge => f.write_str(LARGE),
            Self::PartialColumnTooLarge => write!(f, "{LARGE} and {PARTIAL}"),
        }
    }
}

/// Serializable view of a [`ChainError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub call: usize,
    pub message: String,
}

/// Main error type for escchain I/O operations
#[derive(Debug, Error)]
pub enum EscchainError {
    /// Transport-level errors (device missing, short write)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A chain carried deferred errors and strict mode refused to send it
    #[error("Refusing to send chain with {0} deferred error(s)")]
    Rejected(usize),

    /// Unknown receipt or printer profile name
    #[error("Unknown {kind}: {name}")]
    Unknown { kind: &'static str, name: String },

    /// JSON report serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
