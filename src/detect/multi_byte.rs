//! Structural confidence scoring for the multi-byte encodings.

use super::statistics::{ByteStatistics, SequenceCounts};

/// Ceiling for every structural score. Only an exact byte-order-mark match
/// may reach 1.0.
const STRUCTURAL_CAP: f32 = 0.99;

/// UTF-16 scoring needs at least a few code units before the zero-byte
/// distribution means anything.
const UTF16_MIN_BYTES: u32 = 8;

/// UTF-8 score from sequence validity counts.
///
/// Pure ASCII has no multi-byte sequences and scores zero here; the ASCII
/// model owns that case. Confidence grows with the number of intact
/// sequences and collapses once violations outnumber a small fraction.
pub(crate) fn utf8_score(stats: &ByteStatistics) -> f32 {
    let c = &stats.utf8;
    let seen = c.valid + c.invalid;
    if seen == 0 {
        return 0.0;
    }
    if c.invalid == 0 {
        let evidence = (c.valid as f32 / 6.0).min(1.0);
        return (0.75 + 0.24 * evidence).min(STRUCTURAL_CAP);
    }
    0.4 * c.valid as f32 / (c.valid + 3 * c.invalid) as f32
}

/// Which byte order a UTF-16 model is scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Utf16Order {
    Le,
    Be,
}

/// BOM-less UTF-16 score from the zero-byte parity distribution.
///
/// Latin-script UTF-16 text zeroes out one byte of nearly every code unit,
/// on the side determined by the byte order. A lone surrogate kills the
/// candidate outright.
pub(crate) fn utf16_score(order: Utf16Order, stats: &ByteStatistics) -> f32 {
    if stats.total < UTF16_MIN_BYTES {
        return 0.0;
    }
    let (bad, signal, opposite) = match order {
        Utf16Order::Le => (stats.utf16le_bad_units, stats.odd_zeros, stats.even_zeros),
        Utf16Order::Be => (stats.utf16be_bad_units, stats.even_zeros, stats.odd_zeros),
    };
    if bad > 0 {
        return 0.0;
    }
    let units = (stats.total / 2).max(1) as f32;
    let signal_frac = signal as f32 / units;
    let opposite_frac = opposite as f32 / units;
    if signal_frac >= 0.3 && opposite_frac < signal_frac / 2.0 {
        (0.55 + 0.44 * signal_frac).min(STRUCTURAL_CAP)
    } else {
        0.0
    }
}

/// Double-byte scheme score from pair validity and frequent-character
/// hits.
///
/// The frequent-character factor is what separates the structurally
/// near-identical schemes: GB18030, Big5, EUC-JP, and EUC-KR all accept
/// broadly overlapping lead/trail ranges, but text hits the frequent
/// table of its real encoding far more often than any other.
pub(crate) fn double_byte_score(counts: &SequenceCounts) -> f32 {
    let seen = counts.valid + counts.invalid;
    if seen == 0 {
        return 0.0;
    }
    let valid_frac = counts.valid as f32 / seen as f32;
    if counts.invalid > 0 && valid_frac < 0.9 {
        return 0.25 * valid_frac;
    }
    let mut base = 0.6 + 0.39 * (counts.valid as f32 / 8.0).min(1.0);
    base *= valid_frac;
    let common_frac = counts.common as f32 / counts.valid.max(1) as f32;
    (base * (0.55 + 0.45 * (common_frac * 1.2).min(1.0))).min(STRUCTURAL_CAP)
}
