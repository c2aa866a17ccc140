//! Core charset detection module

pub mod error;
pub mod models;
mod bom;
mod data;
mod language;
mod multi_byte;
mod rank;
mod single_byte;
mod statistics;

use log::{debug, info};

use self::bom::Bom;
use self::data::CodePage;
use self::models::{Candidate, EncodingId};
use self::multi_byte::Utf16Order;
use self::statistics::{ByteStatistics, CjkScheme, SequenceCounts};

pub use self::error::{DetectorError, NoDetection, Result};
pub use self::statistics::MAX_SCAN_BYTES;

/// Single-byte candidates blend structural and language evidence; the
/// blend stays below the ASCII score so byte-exact evidence always wins.
const SINGLE_BYTE_BLEND_CAP: f32 = 0.9;

/// Weight of the structural score in the single-byte blend. The rest
/// comes from the language guesser, which is what separates code pages
/// that are structurally indistinguishable on the same bytes.
const STRUCTURAL_WEIGHT: f32 = 0.6;

/// Discount applied when a single-byte candidate has no language
/// corroboration at all.
const UNCORROBORATED_DISCOUNT: f32 = 0.65;

/// One probability model per supported encoding. A closed set: adding an
/// encoding means adding a variant here and a row to [`MODELS`], and every
/// dispatch below is an exhaustive match.
enum EncodingModel {
    Utf8,
    BomOnly { id: EncodingId, bom: Bom },
    Utf16 { id: EncodingId, bom: Bom, order: Utf16Order },
    Ascii,
    DoubleByte { id: EncodingId, scheme: CjkScheme },
    SingleByte { page: &'static CodePage },
}

static MODELS: [EncodingModel; 14] = [
    EncodingModel::Utf8,
    EncodingModel::BomOnly {
        id: EncodingId::Utf32Le,
        bom: Bom::Utf32Le,
    },
    EncodingModel::BomOnly {
        id: EncodingId::Utf32Be,
        bom: Bom::Utf32Be,
    },
    EncodingModel::Utf16 {
        id: EncodingId::Utf16Le,
        bom: Bom::Utf16Le,
        order: Utf16Order::Le,
    },
    EncodingModel::Utf16 {
        id: EncodingId::Utf16Be,
        bom: Bom::Utf16Be,
        order: Utf16Order::Be,
    },
    EncodingModel::Ascii,
    EncodingModel::DoubleByte {
        id: EncodingId::Gb18030,
        scheme: CjkScheme::Gb18030,
    },
    EncodingModel::DoubleByte {
        id: EncodingId::ShiftJis,
        scheme: CjkScheme::ShiftJis,
    },
    EncodingModel::DoubleByte {
        id: EncodingId::EucJp,
        scheme: CjkScheme::EucJp,
    },
    EncodingModel::DoubleByte {
        id: EncodingId::Big5,
        scheme: CjkScheme::Big5,
    },
    EncodingModel::DoubleByte {
        id: EncodingId::EucKr,
        scheme: CjkScheme::EucKr,
    },
    EncodingModel::SingleByte {
        page: &data::WINDOWS_1251_PAGE,
    },
    EncodingModel::SingleByte {
        page: &data::ISO_8859_7_PAGE,
    },
    EncodingModel::SingleByte {
        page: &data::WINDOWS_1252_PAGE,
    },
];

impl EncodingModel {
    fn encoding(&self) -> EncodingId {
        match self {
            EncodingModel::Utf8 => EncodingId::Utf8,
            EncodingModel::BomOnly { id, .. } => *id,
            EncodingModel::Utf16 { id, .. } => *id,
            EncodingModel::Ascii => EncodingId::Ascii,
            EncodingModel::DoubleByte { id, .. } => *id,
            EncodingModel::SingleByte { page } => page.id,
        }
    }

    /// Total function over any statistics record, including the all-zero
    /// record for empty input.
    fn score(&self, stats: &ByteStatistics) -> f32 {
        match self {
            EncodingModel::Utf8 => {
                if stats.bom == Some(Bom::Utf8) {
                    1.0
                } else {
                    multi_byte::utf8_score(stats)
                }
            }
            EncodingModel::BomOnly { bom, .. } => {
                if stats.bom == Some(*bom) {
                    1.0
                } else {
                    0.0
                }
            }
            EncodingModel::Utf16 { bom, order, .. } => {
                if stats.bom == Some(*bom) {
                    1.0
                } else {
                    multi_byte::utf16_score(*order, stats)
                }
            }
            EncodingModel::Ascii => single_byte::ascii_score(stats),
            EncodingModel::DoubleByte { scheme, .. } => {
                multi_byte::double_byte_score(scheme_counts(stats, *scheme))
            }
            EncodingModel::SingleByte { page } => single_byte::code_page_score(page, stats),
        }
    }
}

fn scheme_counts(stats: &ByteStatistics, scheme: CjkScheme) -> &SequenceCounts {
    match scheme {
        CjkScheme::Gb18030 => &stats.gb18030,
        CjkScheme::ShiftJis => &stats.shift_jis,
        CjkScheme::EucJp => &stats.euc_jp,
        CjkScheme::Big5 => &stats.big5,
        CjkScheme::EucKr => &stats.euc_kr,
    }
}

/// The main charset detector.
///
/// Holds no per-call state: all model tables are process-wide immutable
/// data, so one detector value can serve any number of concurrent calls.
/// Each detection call is independent; confidence values are comparable
/// within a call but not across calls with different inputs.
pub struct CharsetDetector(());

impl CharsetDetector {
    /// Build a detector, validating the static model tables once.
    ///
    /// # Errors
    /// Returns an error only if a table violates its structural
    /// invariants, which indicates a broken build rather than bad input.
    pub fn new() -> Result<CharsetDetector> {
        data::validate()?;
        Ok(CharsetDetector(()))
    }

    /// Rank every supported encoding against the input.
    ///
    /// Never fails: malformed byte content is evidence, not an error.
    /// Candidates that scored exactly zero are dropped, so empty input
    /// yields just the fallback page at its documented baseline.
    pub fn detect_all(&self, data: &[u8]) -> Vec<Candidate> {
        debug!("detecting charset over {} input bytes", data.len());
        let stats = ByteStatistics::collect(data);

        let mut candidates = Vec::with_capacity(MODELS.len());
        for model in &MODELS {
            let id = model.encoding();
            let structural = model.score(&stats);
            let (confidence, language) = finalize(model, id, structural, data);
            candidates.push(Candidate {
                charset: id,
                language,
                confidence,
            });
        }

        let ranked = rank::rank(candidates);
        if let Some(top) = ranked.first() {
            info!(
                "best candidate: {} (confidence {:.2}, language {})",
                top.charset,
                top.confidence,
                top.language.unwrap_or("unknown")
            );
        } else {
            info!("no candidate scored above zero");
        }
        ranked
    }

    /// Return the single best candidate.
    ///
    /// # Errors
    /// [`NoDetection::EmptyInput`] for empty input and
    /// [`NoDetection::Unclassified`] when data exists but every model
    /// scored exactly zero. The two are distinct so callers can tell "no
    /// data" from "unclassifiable data".
    pub fn detect_best(&self, data: &[u8]) -> std::result::Result<Candidate, NoDetection> {
        if data.is_empty() {
            return Err(NoDetection::EmptyInput);
        }
        self.detect_all(data)
            .into_iter()
            .next()
            .ok_or(NoDetection::Unclassified)
    }
}

/// Attach a language guess and fold it into the confidence where the
/// encoding family calls for it.
fn finalize(
    model: &EncodingModel,
    id: EncodingId,
    structural: f32,
    data: &[u8],
) -> (f32, Option<&'static str>) {
    if structural <= 0.0 {
        return (0.0, None);
    }
    if data.is_empty() {
        return (structural, None);
    }
    if let Some(code) = id.fixed_language() {
        return (structural, Some(code));
    }
    match model {
        EncodingModel::SingleByte { .. } => match language::guess(id, data) {
            Some(guess) => {
                let blended = STRUCTURAL_WEIGHT * structural
                    + (1.0 - STRUCTURAL_WEIGHT) * guess.score;
                (blended.min(SINGLE_BYTE_BLEND_CAP), Some(guess.code))
            }
            None => (structural * UNCORROBORATED_DISCOUNT, None),
        },
        _ => {
            let language = language::guess(id, data).map(|guess| guess.code);
            (structural, language)
        }
    }
}

/// Report produced by the one-shot [`detect`] convenience function.
#[derive(Debug, Clone)]
pub struct DetectionReport {
    /// Best candidate, or `None` when nothing could be detected.
    pub best: Option<Candidate>,
    pub is_valid_utf8: bool,
}

/// One-shot detection over a byte sequence.
///
/// Builds a throwaway detector, returns the best candidate together with
/// a UTF-8 validity flag for the raw bytes. Callers doing repeated
/// detection should hold a [`CharsetDetector`] instead.
pub fn detect(data: &[u8]) -> Result<DetectionReport> {
    let detector = CharsetDetector::new()?;
    Ok(DetectionReport {
        best: detector.detect_best(data).ok(),
        is_valid_utf8: std::str::from_utf8(data).is_ok(),
    })
}
