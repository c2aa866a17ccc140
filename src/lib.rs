//! # charset-detector
//!
//! A from-scratch character encoding detector: feed it a byte sequence
//! and get back the most likely charset and, where the script allows it,
//! the most likely natural language.
//!
//! Detection runs in three stages: a single-pass byte statistics
//! collector, one probability model per supported encoding scoring those
//! statistics, and a deterministic ranking policy over the resulting
//! candidates. All model tables are immutable process-wide data, so a
//! detector can be shared across threads freely.
//!
//! ```
//! use charset_detector::CharsetDetector;
//!
//! let detector = CharsetDetector::new().unwrap();
//! let best = detector.detect_best(b"plain ascii text").unwrap();
//! assert_eq!(best.charset_name(), "US-ASCII");
//! ```
pub mod detect;

// Re-export the main types for convenience
pub use detect::{
    detect,
    error::{DetectorError, NoDetection, Result},
    models::{Candidate, EncodingId},
    CharsetDetector, DetectionReport, MAX_SCAN_BYTES,
};
