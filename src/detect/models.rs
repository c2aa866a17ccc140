//! Data structures representing detection results and the supported
//! encoding set.

use encoding_rs::Encoding;

use super::data;

/// The closed set of encodings the detector can report.
///
/// Declaration order doubles as the tie-break order: when two candidates
/// score exactly the same confidence, the one declared earlier wins.
/// BOM-bearing UTF variants come first, the generic windows-1252 superset
/// comes last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingId {
    Utf8,
    Utf32Le,
    Utf32Be,
    Utf16Le,
    Utf16Be,
    Ascii,
    Gb18030,
    ShiftJis,
    EucJp,
    Big5,
    EucKr,
    Windows1251,
    Iso8859_7,
    Windows1252,
}

impl EncodingId {
    /// Conventional charset label for this encoding.
    pub fn name(self) -> &'static str {
        match self {
            EncodingId::Utf8 => "UTF-8",
            EncodingId::Utf32Le => "UTF-32LE",
            EncodingId::Utf32Be => "UTF-32BE",
            EncodingId::Utf16Le => "UTF-16LE",
            EncodingId::Utf16Be => "UTF-16BE",
            EncodingId::Ascii => "US-ASCII",
            EncodingId::Gb18030 => "GB18030",
            EncodingId::ShiftJis => "Shift_JIS",
            EncodingId::EucJp => "EUC-JP",
            EncodingId::Big5 => "Big5",
            EncodingId::EucKr => "EUC-KR",
            EncodingId::Windows1251 => "windows-1251",
            EncodingId::Iso8859_7 => "ISO-8859-7",
            EncodingId::Windows1252 => "windows-1252",
        }
    }

    /// Position in the fixed tie-break total order. Lower wins ties.
    pub fn priority(self) -> u8 {
        match self {
            EncodingId::Utf8 => 0,
            EncodingId::Utf32Le => 1,
            EncodingId::Utf32Be => 2,
            EncodingId::Utf16Le => 3,
            EncodingId::Utf16Be => 4,
            EncodingId::Ascii => 5,
            EncodingId::Gb18030 => 6,
            EncodingId::ShiftJis => 7,
            EncodingId::EucJp => 8,
            EncodingId::Big5 => 9,
            EncodingId::EucKr => 10,
            EncodingId::Windows1251 => 11,
            EncodingId::Iso8859_7 => 12,
            EncodingId::Windows1252 => 13,
        }
    }

    /// The `encoding_rs` decoder for this encoding, if one exists.
    ///
    /// UTF-32 has no `encoding_rs` decoder. US-ASCII decodes through
    /// windows-1252, its byte-compatible superset.
    pub fn encoding(self) -> Option<&'static Encoding> {
        match self {
            EncodingId::Utf8 => Some(encoding_rs::UTF_8),
            EncodingId::Utf32Le | EncodingId::Utf32Be => None,
            EncodingId::Utf16Le => Some(encoding_rs::UTF_16LE),
            EncodingId::Utf16Be => Some(encoding_rs::UTF_16BE),
            EncodingId::Ascii => Some(encoding_rs::WINDOWS_1252),
            EncodingId::Gb18030 => Some(encoding_rs::GB18030),
            EncodingId::ShiftJis => Some(encoding_rs::SHIFT_JIS),
            EncodingId::EucJp => Some(encoding_rs::EUC_JP),
            EncodingId::Big5 => Some(encoding_rs::BIG5),
            EncodingId::EucKr => Some(encoding_rs::EUC_KR),
            EncodingId::Windows1251 => Some(encoding_rs::WINDOWS_1251),
            EncodingId::Iso8859_7 => Some(encoding_rs::ISO_8859_7),
            EncodingId::Windows1252 => Some(encoding_rs::WINDOWS_1252),
        }
    }

    /// Language implied by the encoding itself, for encodings whose script
    /// maps to a single language in practice.
    pub(crate) fn fixed_language(self) -> Option<&'static str> {
        match self {
            EncodingId::Gb18030 | EncodingId::Big5 => Some("zh"),
            EncodingId::ShiftJis | EncodingId::EucJp => Some("ja"),
            EncodingId::EucKr => Some("ko"),
            _ => None,
        }
    }

    /// Language models eligible for text decoded under this encoding.
    pub(crate) fn language_models(self) -> &'static [&'static data::LangModel] {
        match self {
            EncodingId::Ascii | EncodingId::Windows1252 => data::LATIN_LANGS,
            EncodingId::Windows1251 => data::CYRILLIC_LANGS,
            EncodingId::Iso8859_7 => data::GREEK_LANGS,
            EncodingId::Utf8 | EncodingId::Utf16Le | EncodingId::Utf16Be => data::ALL_LANGS,
            _ => &[],
        }
    }
}

impl std::fmt::Display for EncodingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One scored guess for a given input.
///
/// Confidence is in `[0, 1]` and only comparable to other candidates from
/// the same detection call. 1.0 is reserved for byte-order-mark matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub charset: EncodingId,
    /// ISO 639-1 code of the most likely language, when one could be
    /// guessed for the charset's script.
    pub language: Option<&'static str>,
    pub confidence: f32,
}

impl Candidate {
    /// Conventional charset label, e.g. `"UTF-8"` or `"windows-1251"`.
    pub fn charset_name(&self) -> &'static str {
        self.charset.name()
    }
}
