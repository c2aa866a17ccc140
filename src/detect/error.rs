//! Custom error types for the charset-detector crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Byte content is never an error: malformed, mixed, or empty input is
/// modeled as low or zero confidence. Errors are reserved for broken
/// internal state, such as a misconfigured model table.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// A static model table failed its startup validation.
    #[error("Invalid model table {name}: {reason}")]
    InvalidTable {
        name: &'static str,
        reason: String,
    },
}

/// Outcome signal for [`detect_best`](crate::CharsetDetector::detect_best)
/// when no candidate can be returned.
///
/// Distinguishes "there was nothing to classify" from "there was data but
/// every model scored zero".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NoDetection {
    /// The input byte sequence was empty.
    #[error("no input bytes to classify")]
    EmptyInput,

    /// Every encoding model produced a confidence of exactly zero.
    #[error("no encoding model produced a nonzero confidence")]
    Unclassified,
}

/// A convenience `Result` type alias using the crate's `DetectorError` type.
pub type Result<T> = std::result::Result<T, DetectorError>;
