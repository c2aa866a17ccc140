//! Confidence scoring for ASCII and the single-byte code pages.

use log::trace;

use super::data::{CodePage, LETTER, UNDEFINED};
use super::statistics::ByteStatistics;

/// Structural scores stay below the BOM score of 1.0 and below the ASCII
/// model, so a code page can never outrank direct byte evidence.
const CODE_PAGE_CAP: f32 = 0.85;

/// Confidence reported for empty input by the fallback page. Empty input
/// carries no evidence, so some ASCII-compatible default must be reported
/// at a deliberately low confidence.
pub(crate) const EMPTY_INPUT_BASELINE: f32 = 0.2;

/// Score for input that is entirely ASCII. Penalized toward zero as the
/// share of non-text control bytes grows.
pub(crate) fn ascii_score(stats: &ByteStatistics) -> f32 {
    if stats.total == 0 || stats.non_ascii > 0 {
        return 0.0;
    }
    let ctrl_frac = stats.control as f32 / stats.total as f32;
    (0.95 * (1.0 - (4.0 * ctrl_frac).min(1.0))).max(0.0)
}

/// Score one code page from the high-byte classes alone: the fraction of
/// bytes above 0x7F that are letters in the page, penalized hard for hits
/// on unassigned bytes.
pub(crate) fn code_page_score(page: &CodePage, stats: &ByteStatistics) -> f32 {
    if stats.total == 0 {
        return if page.fallback { EMPTY_INPUT_BASELINE } else { 0.0 };
    }
    let mut high = 0u32;
    let mut letters = 0u32;
    let mut undefined = 0u32;
    for b in 0x80usize..=0xFF {
        let count = stats.histogram[b];
        if count == 0 {
            continue;
        }
        high += count;
        match page.classes[b] {
            LETTER => letters += count,
            UNDEFINED => undefined += count,
            _ => {}
        }
    }
    if high == 0 {
        return 0.0;
    }
    let letter_frac = letters as f32 / high as f32;
    let undef_penalty = 1.0 - (2.0 * undefined as f32 / high as f32).min(1.0);
    let score = CODE_PAGE_CAP * letter_frac * undef_penalty;
    trace!(
        "{}: {} high bytes, {} letters, {} undefined, score {:.3}",
        page.id,
        high,
        letters,
        undefined,
        score
    );
    score
}
