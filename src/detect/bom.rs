//! Byte-order-mark recognition.

/// A recognized byte-order-mark prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bom {
    Utf8,
    Utf32Le,
    Utf32Be,
    Utf16Le,
    Utf16Be,
}

/// Signature table, longest patterns first so that the UTF-32LE mark
/// `FF FE 00 00` is not mistaken for the UTF-16LE mark `FF FE`.
const BOM_TABLE: &[(Bom, &[u8])] = &[
    (Bom::Utf32Le, &[0xFF, 0xFE, 0x00, 0x00]),
    (Bom::Utf32Be, &[0x00, 0x00, 0xFE, 0xFF]),
    (Bom::Utf8, &[0xEF, 0xBB, 0xBF]),
    (Bom::Utf16Le, &[0xFF, 0xFE]),
    (Bom::Utf16Be, &[0xFE, 0xFF]),
];

impl Bom {
    /// Longest-match BOM sniffing over the input prefix.
    pub(crate) fn sniff(data: &[u8]) -> Option<Bom> {
        BOM_TABLE
            .iter()
            .find(|(_, pattern)| data.starts_with(pattern))
            .map(|(bom, _)| *bom)
    }
}
