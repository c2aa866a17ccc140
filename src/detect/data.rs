//! Process-wide immutable model tables.
//!
//! Everything in this module is `const`/`static` data: byte-class tables
//! for the single-byte code pages, frequent-character tables for the East
//! Asian double-byte schemes, and bigram frequency tables for the language
//! guessers. Loaded once into the binary, never mutated, safe to share
//! across concurrent detection calls without locking.

use super::error::{DetectorError, Result};
use super::models::EncodingId;

/// Byte class: carries no evidence either way (punctuation, digits, space).
pub(crate) const NEUTRAL: u8 = 0;
/// Byte class: a letter in the code page's script.
pub(crate) const LETTER: u8 = 1;
/// Byte class: unassigned in the code page. Strong negative evidence.
pub(crate) const UNDEFINED: u8 = 2;

/// A single-byte code page model: per-byte classes plus the language
/// models eligible for text decoded under it.
pub(crate) struct CodePage {
    pub id: EncodingId,
    pub classes: &'static [u8; 256],
    /// The designated fallback page produces the baseline candidate for
    /// empty input. Exactly one page carries this flag.
    pub fallback: bool,
}

const fn mark(mut table: [u8; 256], byte: usize, class: u8) -> [u8; 256] {
    table[byte] = class;
    table
}

const fn mark_range(mut table: [u8; 256], start: usize, end: usize, class: u8) -> [u8; 256] {
    let mut i = start;
    while i <= end {
        table[i] = class;
        i += 1;
    }
    table
}

/// ASCII letters are letters in every supported code page.
const fn ascii_letters() -> [u8; 256] {
    let mut t = [NEUTRAL; 256];
    t = mark_range(t, b'A' as usize, b'Z' as usize, LETTER);
    t = mark_range(t, b'a' as usize, b'z' as usize, LETTER);
    t
}

const fn windows_1252_classes() -> [u8; 256] {
    let mut t = ascii_letters();
    t = mark(t, 0x81, UNDEFINED);
    t = mark(t, 0x8D, UNDEFINED);
    t = mark(t, 0x8F, UNDEFINED);
    t = mark(t, 0x90, UNDEFINED);
    t = mark(t, 0x9D, UNDEFINED);
    // S/Z/OE with caron or ligature, and Y with diaeresis
    t = mark(t, 0x8A, LETTER);
    t = mark(t, 0x8C, LETTER);
    t = mark(t, 0x8E, LETTER);
    t = mark(t, 0x9A, LETTER);
    t = mark(t, 0x9C, LETTER);
    t = mark(t, 0x9E, LETTER);
    t = mark(t, 0x9F, LETTER);
    // Accented Latin block, minus the multiply/divide signs at D7/F7
    t = mark_range(t, 0xC0, 0xD6, LETTER);
    t = mark_range(t, 0xD8, 0xF6, LETTER);
    t = mark_range(t, 0xF8, 0xFF, LETTER);
    t
}

const fn windows_1251_classes() -> [u8; 256] {
    let mut t = ascii_letters();
    t = mark(t, 0x98, UNDEFINED);
    // Serbian/Macedonian/Ukrainian letters scattered through 0x80-0xBF
    t = mark(t, 0x80, LETTER);
    t = mark(t, 0x81, LETTER);
    t = mark(t, 0x83, LETTER);
    t = mark(t, 0x8A, LETTER);
    t = mark(t, 0x8C, LETTER);
    t = mark(t, 0x8D, LETTER);
    t = mark(t, 0x8E, LETTER);
    t = mark(t, 0x8F, LETTER);
    t = mark(t, 0x90, LETTER);
    t = mark(t, 0x9A, LETTER);
    t = mark(t, 0x9C, LETTER);
    t = mark(t, 0x9D, LETTER);
    t = mark(t, 0x9E, LETTER);
    t = mark(t, 0x9F, LETTER);
    t = mark(t, 0xA1, LETTER);
    t = mark(t, 0xA2, LETTER);
    t = mark(t, 0xA3, LETTER);
    t = mark(t, 0xA5, LETTER);
    t = mark(t, 0xA8, LETTER);
    t = mark(t, 0xAA, LETTER);
    t = mark(t, 0xAF, LETTER);
    t = mark(t, 0xB2, LETTER);
    t = mark(t, 0xB3, LETTER);
    t = mark(t, 0xB4, LETTER);
    t = mark(t, 0xB8, LETTER);
    t = mark(t, 0xBA, LETTER);
    t = mark(t, 0xBF, LETTER);
    // The full Russian alphabet
    t = mark_range(t, 0xC0, 0xFF, LETTER);
    t
}

const fn iso_8859_7_classes() -> [u8; 256] {
    let mut t = ascii_letters();
    // C1 control range; never present in Greek text
    t = mark_range(t, 0x80, 0x9F, UNDEFINED);
    t = mark(t, 0xAE, UNDEFINED);
    t = mark(t, 0xFF, UNDEFINED);
    // Accented capitals
    t = mark(t, 0xB6, LETTER);
    t = mark_range(t, 0xB8, 0xBA, LETTER);
    t = mark(t, 0xBC, LETTER);
    t = mark(t, 0xBE, LETTER);
    t = mark(t, 0xBF, LETTER);
    // Main Greek alphabet, 0xD2 is unassigned
    t = mark_range(t, 0xC0, 0xD1, LETTER);
    t = mark_range(t, 0xD3, 0xFE, LETTER);
    t
}

static CLASSES_1252: [u8; 256] = windows_1252_classes();
static CLASSES_1251: [u8; 256] = windows_1251_classes();
static CLASSES_8859_7: [u8; 256] = iso_8859_7_classes();

pub(crate) static WINDOWS_1252_PAGE: CodePage = CodePage {
    id: EncodingId::Windows1252,
    classes: &CLASSES_1252,
    fallback: true,
};

pub(crate) static WINDOWS_1251_PAGE: CodePage = CodePage {
    id: EncodingId::Windows1251,
    classes: &CLASSES_1251,
    fallback: false,
};

pub(crate) static ISO_8859_7_PAGE: CodePage = CodePage {
    id: EncodingId::Iso8859_7,
    classes: &CLASSES_8859_7,
    fallback: false,
};

pub(crate) static PAGES: &[&CodePage] = &[
    &WINDOWS_1251_PAGE,
    &ISO_8859_7_PAGE,
    &WINDOWS_1252_PAGE,
];

/// Frequent-character tables for the double-byte schemes, stored as
/// `lead << 8 | trail` and sorted ascending for binary search. A pair
/// landing in its scheme's table is strong evidence for that scheme over
/// the structurally compatible alternatives.
pub(crate) static GB18030_COMMON: &[u16] = &[
    0xB2BB, // 不
    0xB4F3, // 大
    0xB5C4, // 的
    0xB9FA, // 国
    0xBACD, // 和
    0xC0B4, // 来
    0xC1CB, // 了
    0xC8CB, // 人
    0xC9CF, // 上
    0xCAC7, // 是
    0xCBFB, // 他
    0xCED2, // 我
    0xD2BB, // 一
    0xD3D0, // 有
    0xD4DA, // 在
    0xD6D0, // 中
];

pub(crate) static SHIFT_JIS_COMMON: &[u16] = &[
    0x8CEA, // 語
    0x93FA, // 日
    0x967B, // 本
];

pub(crate) static EUC_JP_COMMON: &[u16] = &[
    0xB8EC, // 語
    0xC6FC, // 日
    0xCBDC, // 本
];

pub(crate) static BIG5_COMMON: &[u16] = &[
    0xA440, // 一
    0xA446, // 了
    0xA448, // 人
    0xA4A3, // 不
    0xA662, // 在
    0xA6B3, // 有
    0xA7DA, // 我
    0xAABA, // 的
    0xAC4F, // 是
];

pub(crate) static EUC_KR_COMMON: &[u16] = &[
    0xB0A1, // 가
    0xB1B9, // 국
    0xB3AA, // 나
    0xB4D9, // 다
    0xBEEE, // 어
    0xC0CC, // 이
    0xC7D1, // 한
];

/// Bigram frequency model for one language. Bigrams are over case-folded
/// letters; weights descend from the most frequent bigram.
pub(crate) struct LangModel {
    pub code: &'static str,
    pub bigrams: &'static [(char, char, u8)],
}

impl LangModel {
    pub(crate) fn weight(&self, a: char, b: char) -> u32 {
        for &(x, y, w) in self.bigrams {
            if x == a && y == b {
                return w as u32;
            }
        }
        0
    }
}

pub(crate) static LANG_EN: LangModel = LangModel {
    code: "en",
    bigrams: &[
        ('t', 'h', 62),
        ('h', 'e', 60),
        ('i', 'n', 55),
        ('e', 'r', 54),
        ('a', 'n', 52),
        ('r', 'e', 50),
        ('o', 'n', 48),
        ('a', 't', 46),
        ('e', 'n', 45),
        ('n', 'd', 44),
        ('t', 'i', 43),
        ('e', 's', 42),
        ('o', 'r', 41),
        ('t', 'e', 40),
        ('o', 'f', 39),
        ('e', 'd', 38),
        ('i', 's', 37),
        ('i', 't', 36),
        ('a', 'l', 35),
        ('a', 'r', 34),
        ('s', 't', 33),
        ('t', 'o', 32),
        ('n', 't', 31),
        ('n', 'g', 30),
        ('s', 'e', 29),
        ('h', 'a', 28),
        ('a', 's', 27),
        ('o', 'u', 26),
        ('i', 'o', 25),
        ('v', 'e', 24),
        ('c', 'o', 23),
        ('m', 'e', 22),
        ('h', 'i', 20),
        ('r', 'i', 19),
        ('r', 'o', 18),
        ('i', 'c', 17),
        ('n', 'e', 16),
        ('e', 'a', 15),
        ('r', 'a', 14),
        ('c', 'e', 13),
        ('w', 'a', 12),
        ('w', 'i', 11),
        ('w', 'h', 10),
    ],
};

pub(crate) static LANG_FR: LangModel = LangModel {
    code: "fr",
    bigrams: &[
        ('e', 's', 60),
        ('l', 'e', 58),
        ('d', 'e', 57),
        ('e', 'n', 55),
        ('r', 'e', 52),
        ('n', 't', 50),
        ('o', 'n', 48),
        ('o', 'u', 47),
        ('q', 'u', 46),
        ('u', 'e', 45),
        ('l', 'a', 44),
        ('a', 'i', 43),
        ('s', 'e', 42),
        ('e', 't', 41),
        ('i', 't', 40),
        ('t', 'e', 39),
        ('e', 'l', 38),
        ('m', 'e', 37),
        ('n', 'e', 36),
        ('c', 'e', 35),
        ('a', 'n', 34),
        ('a', 'u', 33),
        ('u', 'r', 32),
        ('s', 's', 31),
        ('s', 'i', 30),
        ('i', 'l', 29),
        ('u', 's', 28),
        ('p', 'a', 27),
        ('p', 'e', 26),
        ('t', 'r', 25),
        ('c', 'o', 24),
        ('a', 'r', 23),
        ('r', 'a', 22),
        ('i', 'e', 21),
        ('n', 's', 20),
        ('t', 'i', 19),
        ('r', 'o', 18),
        ('l', 'i', 17),
        ('e', 'u', 16),
        ('u', 'n', 15),
    ],
};

pub(crate) static LANG_DE: LangModel = LangModel {
    code: "de",
    bigrams: &[
        ('e', 'n', 62),
        ('e', 'r', 60),
        ('c', 'h', 58),
        ('d', 'e', 52),
        ('e', 'i', 50),
        ('i', 'e', 48),
        ('t', 'e', 46),
        ('i', 'n', 45),
        ('n', 'd', 44),
        ('g', 'e', 43),
        ('s', 't', 40),
        ('u', 'n', 39),
        ('s', 'c', 38),
        ('h', 'e', 36),
        ('b', 'e', 34),
        ('d', 'i', 33),
        ('d', 'a', 32),
        ('a', 'n', 31),
        ('a', 'u', 30),
        ('e', 's', 29),
        ('z', 'u', 28),
        ('i', 'm', 27),
        ('i', 'c', 26),
        ('h', 't', 25),
        ('r', 't', 24),
        ('s', 's', 23),
        ('e', 'l', 22),
        ('n', 'g', 21),
        ('a', 'l', 20),
        ('u', 'r', 19),
    ],
};

pub(crate) static LANG_ES: LangModel = LangModel {
    code: "es",
    bigrams: &[
        ('d', 'e', 60),
        ('e', 's', 58),
        ('e', 'n', 56),
        ('e', 'l', 52),
        ('l', 'a', 50),
        ('o', 's', 48),
        ('a', 's', 46),
        ('a', 'r', 44),
        ('u', 'e', 42),
        ('r', 'a', 40),
        ('r', 'e', 38),
        ('e', 'r', 36),
        ('q', 'u', 35),
        ('a', 'n', 34),
        ('o', 'n', 32),
        ('s', 't', 30),
        ('a', 'd', 28),
        ('a', 'l', 26),
        ('c', 'i', 24),
        ('i', 'o', 22),
        ('n', 't', 20),
        ('o', 'r', 18),
        ('t', 'a', 16),
        ('d', 'o', 14),
        ('s', 'e', 12),
        ('u', 'n', 10),
    ],
};

pub(crate) static LANG_RU: LangModel = LangModel {
    code: "ru",
    bigrams: &[
        ('с', 'т', 60),
        ('е', 'н', 57),
        ('о', 'в', 55),
        ('н', 'о', 54),
        ('н', 'а', 53),
        ('п', 'р', 52),
        ('т', 'о', 50),
        ('н', 'и', 49),
        ('р', 'а', 48),
        ('к', 'о', 47),
        ('е', 'т', 46),
        ('о', 'с', 45),
        ('р', 'е', 44),
        ('в', 'о', 43),
        ('о', 'р', 42),
        ('т', 'а', 41),
        ('п', 'о', 40),
        ('е', 'р', 39),
        ('р', 'о', 38),
        ('о', 'л', 37),
        ('а', 'н', 36),
        ('и', 'я', 35),
        ('а', 'т', 34),
        ('к', 'а', 33),
        ('л', 'ь', 32),
        ('н', 'е', 31),
        ('л', 'и', 30),
        ('и', 'т', 29),
        ('о', 'д', 28),
        ('р', 'и', 27),
        ('т', 'е', 26),
        ('г', 'о', 25),
        ('а', 'л', 24),
        ('и', 'н', 23),
        ('в', 'е', 22),
        ('у', 'с', 21),
        ('с', 'к', 20),
        ('и', 'в', 19),
        ('л', 'о', 18),
        ('с', 'с', 17),
    ],
};

pub(crate) static LANG_EL: LangModel = LangModel {
    code: "el",
    bigrams: &[
        ('α', 'ι', 60),
        ('τ', 'α', 57),
        ('ο', 'υ', 55),
        ('τ', 'ο', 54),
        ('ε', 'ι', 50),
        ('ν', 'α', 48),
        ('ο', 'ν', 46),
        ('η', 'σ', 44),
        ('κ', 'α', 43),
        ('α', 'ν', 42),
        ('ο', 'σ', 41),
        ('τ', 'η', 40),
        ('ε', 'ρ', 38),
        ('ι', 'κ', 36),
        ('ι', 'α', 35),
        ('μ', 'ε', 34),
        ('ε', 'ν', 33),
        ('τ', 'ι', 32),
        ('α', 'σ', 31),
        ('λ', 'λ', 30),
        ('η', 'ν', 29),
        ('ρ', 'ο', 28),
        ('σ', 'ε', 27),
        ('α', 'υ', 26),
        ('π', 'ο', 25),
        ('ε', 'σ', 24),
        ('γ', 'ι', 23),
        ('ω', 'ν', 22),
        ('ν', 'ο', 21),
        ('ρ', 'α', 20),
    ],
};

pub(crate) static LATIN_LANGS: &[&LangModel] = &[&LANG_EN, &LANG_FR, &LANG_DE, &LANG_ES];
pub(crate) static CYRILLIC_LANGS: &[&LangModel] = &[&LANG_RU];
pub(crate) static GREEK_LANGS: &[&LangModel] = &[&LANG_EL];
pub(crate) static ALL_LANGS: &[&LangModel] =
    &[&LANG_EN, &LANG_FR, &LANG_DE, &LANG_ES, &LANG_RU, &LANG_EL];

/// Validate every static table once at detector construction.
///
/// Invariants: exactly one fallback code page, every page knows at least
/// one letter byte above 0x7F, language tables are non-empty with nonzero
/// weights, and the frequent-character tables are sorted so binary search
/// is sound.
pub(crate) fn validate() -> Result<()> {
    let fallbacks = PAGES.iter().filter(|p| p.fallback).count();
    if fallbacks != 1 {
        return Err(DetectorError::InvalidTable {
            name: "code pages",
            reason: format!("expected exactly one fallback page, found {}", fallbacks),
        });
    }
    for page in PAGES {
        let letters = page.classes[0x80..].iter().filter(|&&c| c == LETTER).count();
        if letters == 0 {
            return Err(DetectorError::InvalidTable {
                name: page.id.name(),
                reason: "no letter bytes above 0x7F".to_string(),
            });
        }
    }
    for lang in ALL_LANGS {
        if lang.bigrams.is_empty() {
            return Err(DetectorError::InvalidTable {
                name: lang.code,
                reason: "empty bigram table".to_string(),
            });
        }
        if lang.bigrams.iter().any(|&(_, _, w)| w == 0) {
            return Err(DetectorError::InvalidTable {
                name: lang.code,
                reason: "zero-weight bigram".to_string(),
            });
        }
    }
    for (name, table) in [
        ("GB18030 common", GB18030_COMMON),
        ("Shift_JIS common", SHIFT_JIS_COMMON),
        ("EUC-JP common", EUC_JP_COMMON),
        ("Big5 common", BIG5_COMMON),
        ("EUC-KR common", EUC_KR_COMMON),
    ] {
        if table.windows(2).any(|w| w[0] >= w[1]) {
            return Err(DetectorError::InvalidTable {
                name,
                reason: "table not sorted ascending".to_string(),
            });
        }
    }
    Ok(())
}
