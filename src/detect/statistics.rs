//! Single-pass byte statistics collection.
//!
//! One linear scan over (a capped prefix of) the input feeds every
//! per-scheme scanner at once, so the probability models never touch the
//! raw bytes themselves.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::trace;

use super::bom::Bom;
use super::data;

/// Latency bound for very large inputs. Detection quality plateaus well
/// below this; scanning more is a sampling policy, not a correctness one.
pub const MAX_SCAN_BYTES: usize = 64 * 1024;

/// Valid/invalid/frequent sequence counters for one multi-byte scheme.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SequenceCounts {
    /// Completed sequences that satisfy the scheme's byte grammar.
    pub valid: u32,
    /// Grammar violations, counted once per violation with resync.
    pub invalid: u32,
    /// Valid sequences that also land in the scheme's frequent-character
    /// table or range.
    pub common: u32,
}

/// Fixed-shape statistics record produced by one collection pass.
///
/// Empty input yields the all-zero record, never an error.
#[derive(Debug, Clone)]
pub(crate) struct ByteStatistics {
    pub histogram: [u32; 256],
    /// Bytes actually scanned, capped at [`MAX_SCAN_BYTES`].
    pub total: u32,
    pub bom: Option<Bom>,
    pub non_ascii: u32,
    /// C0 controls other than tab/newline/carriage-return, plus DEL.
    pub control: u32,
    pub even_zeros: u32,
    pub odd_zeros: u32,
    /// Lone surrogates seen when reading the input as UTF-16 code units.
    pub utf16le_bad_units: u32,
    pub utf16be_bad_units: u32,
    pub utf8: SequenceCounts,
    pub gb18030: SequenceCounts,
    pub shift_jis: SequenceCounts,
    pub euc_jp: SequenceCounts,
    pub big5: SequenceCounts,
    pub euc_kr: SequenceCounts,
}

impl ByteStatistics {
    pub(crate) fn collect(data: &[u8]) -> ByteStatistics {
        let scan = &data[..data.len().min(MAX_SCAN_BYTES)];

        let mut histogram = [0u32; 256];
        let mut non_ascii = 0u32;
        let mut control = 0u32;
        let mut even_zeros = 0u32;
        let mut odd_zeros = 0u32;

        let mut utf8 = Utf8Scan::new();
        let mut utf16 = Utf16Scan::new();
        let mut gb18030 = CjkScan::new(CjkScheme::Gb18030);
        let mut shift_jis = CjkScan::new(CjkScheme::ShiftJis);
        let mut euc_jp = CjkScan::new(CjkScheme::EucJp);
        let mut big5 = CjkScan::new(CjkScheme::Big5);
        let mut euc_kr = CjkScan::new(CjkScheme::EucKr);

        for (i, &b) in scan.iter().enumerate() {
            histogram[b as usize] += 1;
            if b >= 0x80 {
                non_ascii += 1;
            } else if b == 0x7F || (b < 0x20 && b != b'\t' && b != b'\n' && b != b'\r') {
                control += 1;
            }
            if b == 0 {
                if i % 2 == 0 {
                    even_zeros += 1;
                } else {
                    odd_zeros += 1;
                }
            }
            utf8.push(b);
            utf16.push(b);
            gb18030.push(b);
            shift_jis.push(b);
            euc_jp.push(b);
            big5.push(b);
            euc_kr.push(b);
        }

        let stats = ByteStatistics {
            histogram,
            total: scan.len() as u32,
            bom: Bom::sniff(data),
            non_ascii,
            control,
            even_zeros,
            odd_zeros,
            utf16le_bad_units: utf16.le_bad,
            utf16be_bad_units: utf16.be_bad,
            utf8: utf8.finish(),
            gb18030: gb18030.finish(),
            shift_jis: shift_jis.finish(),
            euc_jp: euc_jp.finish(),
            big5: big5.finish(),
            euc_kr: euc_kr.finish(),
        };
        trace!(
            "collected statistics: {} bytes scanned, {} non-ascii, bom={:?}",
            stats.total,
            stats.non_ascii,
            stats.bom
        );
        stats
    }
}

/// UTF-8 sequence scanner. Enforces the full continuation grammar,
/// including the tightened first-continuation ranges after E0/ED/F0/F4
/// that rule out overlong forms and surrogates.
struct Utf8Scan {
    remaining: u8,
    first_min: u8,
    first_max: u8,
    at_first: bool,
    counts: SequenceCounts,
}

impl Utf8Scan {
    fn new() -> Self {
        Utf8Scan {
            remaining: 0,
            first_min: 0x80,
            first_max: 0xBF,
            at_first: false,
            counts: SequenceCounts::default(),
        }
    }

    fn push(&mut self, b: u8) {
        if self.remaining > 0 {
            let (min, max) = if self.at_first {
                (self.first_min, self.first_max)
            } else {
                (0x80, 0xBF)
            };
            if b >= min && b <= max {
                self.at_first = false;
                self.remaining -= 1;
                if self.remaining == 0 {
                    self.counts.valid += 1;
                }
            } else {
                self.counts.invalid += 1;
                self.remaining = 0;
                self.start(b);
            }
        } else {
            self.start(b);
        }
    }

    fn start(&mut self, b: u8) {
        let (remaining, first_min, first_max) = match b {
            0x00..=0x7F => return,
            0xC2..=0xDF => (1, 0x80, 0xBF),
            0xE0 => (2, 0xA0, 0xBF),
            0xE1..=0xEC | 0xEE..=0xEF => (2, 0x80, 0xBF),
            0xED => (2, 0x80, 0x9F),
            0xF0 => (3, 0x90, 0xBF),
            0xF1..=0xF3 => (3, 0x80, 0xBF),
            0xF4 => (3, 0x80, 0x8F),
            _ => {
                // Stray continuation byte or an invalid lead (C0, C1, F5+)
                self.counts.invalid += 1;
                return;
            }
        };
        self.remaining = remaining;
        self.first_min = first_min;
        self.first_max = first_max;
        self.at_first = true;
    }

    fn finish(mut self) -> SequenceCounts {
        if self.remaining > 0 {
            self.counts.invalid += 1;
        }
        self.counts
    }
}

/// Reads the input as UTF-16 code units in both byte orders and counts
/// surrogate-pairing violations for each.
struct Utf16Scan {
    half: Option<u8>,
    le_expect_low: bool,
    be_expect_low: bool,
    le_bad: u32,
    be_bad: u32,
}

impl Utf16Scan {
    fn new() -> Self {
        Utf16Scan {
            half: None,
            le_expect_low: false,
            be_expect_low: false,
            le_bad: 0,
            be_bad: 0,
        }
    }

    fn push(&mut self, b: u8) {
        match self.half.take() {
            None => self.half = Some(b),
            Some(first) => {
                let pair = [first, b];
                let le = LittleEndian::read_u16(&pair);
                let be = BigEndian::read_u16(&pair);
                Self::feed(le, &mut self.le_expect_low, &mut self.le_bad);
                Self::feed(be, &mut self.be_expect_low, &mut self.be_bad);
            }
        }
    }

    fn feed(unit: u16, expect_low: &mut bool, bad: &mut u32) {
        if *expect_low {
            if !(0xDC00..=0xDFFF).contains(&unit) {
                *bad += 1;
            }
            *expect_low = false;
        } else if (0xD800..=0xDBFF).contains(&unit) {
            *expect_low = true;
        } else if (0xDC00..=0xDFFF).contains(&unit) {
            *bad += 1;
        }
    }
}

/// The double-byte East Asian schemes tracked by [`CjkScan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CjkScheme {
    Gb18030,
    ShiftJis,
    EucJp,
    Big5,
    EucKr,
}

/// Byte-grammar scanner for one double-byte scheme. ASCII passes through;
/// lead bytes open a sequence whose trail bytes are validated against the
/// scheme's ranges.
struct CjkScan {
    scheme: CjkScheme,
    lead: u8,
    trails_left: u8,
    counts: SequenceCounts,
}

impl CjkScan {
    fn new(scheme: CjkScheme) -> Self {
        CjkScan {
            scheme,
            lead: 0,
            trails_left: 0,
            counts: SequenceCounts::default(),
        }
    }

    fn push(&mut self, b: u8) {
        if self.trails_left > 0 {
            if self.trail_ok(b) {
                self.trails_left -= 1;
                if self.trails_left == 0 {
                    self.counts.valid += 1;
                    if self.is_common(b) {
                        self.counts.common += 1;
                    }
                }
            } else {
                self.counts.invalid += 1;
                self.trails_left = 0;
                self.start(b);
            }
        } else {
            self.start(b);
        }
    }

    fn start(&mut self, b: u8) {
        if b < 0x80 {
            return;
        }
        let trails = match self.scheme {
            CjkScheme::Gb18030 => match b {
                0x81..=0xFE => 1,
                _ => 0,
            },
            CjkScheme::ShiftJis => match b {
                // Half-width katakana is a complete single-byte form
                0xA1..=0xDF => {
                    self.counts.valid += 1;
                    return;
                }
                0x81..=0x9F | 0xE0..=0xEF => 1,
                _ => 0,
            },
            CjkScheme::EucJp => match b {
                0x8E => 1,
                0x8F => 2,
                0xA1..=0xFE => 1,
                _ => 0,
            },
            CjkScheme::Big5 => match b {
                0x81..=0xFE => 1,
                _ => 0,
            },
            CjkScheme::EucKr => match b {
                0xA1..=0xFE => 1,
                _ => 0,
            },
        };
        if trails == 0 {
            self.counts.invalid += 1;
        } else {
            self.lead = b;
            self.trails_left = trails;
        }
    }

    fn trail_ok(&self, b: u8) -> bool {
        match self.scheme {
            CjkScheme::Gb18030 => (0x40..=0xFE).contains(&b) && b != 0x7F,
            CjkScheme::ShiftJis => (0x40..=0xFC).contains(&b) && b != 0x7F,
            CjkScheme::EucJp => {
                if self.lead == 0x8E {
                    (0xA1..=0xDF).contains(&b)
                } else {
                    (0xA1..=0xFE).contains(&b)
                }
            }
            CjkScheme::Big5 => (0x40..=0x7E).contains(&b) || (0xA1..=0xFE).contains(&b),
            CjkScheme::EucKr => (0xA1..=0xFE).contains(&b),
        }
    }

    fn is_common(&self, trail: u8) -> bool {
        let pair = (self.lead as u16) << 8 | trail as u16;
        match self.scheme {
            CjkScheme::Gb18030 => data::GB18030_COMMON.binary_search(&pair).is_ok(),
            CjkScheme::ShiftJis => {
                self.lead == 0x82
                    || self.lead == 0x83
                    || data::SHIFT_JIS_COMMON.binary_search(&pair).is_ok()
            }
            CjkScheme::EucJp => {
                self.lead == 0xA4
                    || self.lead == 0xA5
                    || data::EUC_JP_COMMON.binary_search(&pair).is_ok()
            }
            CjkScheme::Big5 => data::BIG5_COMMON.binary_search(&pair).is_ok(),
            CjkScheme::EucKr => data::EUC_KR_COMMON.binary_search(&pair).is_ok(),
        }
    }

    fn finish(mut self) -> SequenceCounts {
        if self.trails_left > 0 {
            self.counts.invalid += 1;
        }
        self.counts
    }
}
