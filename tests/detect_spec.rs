use charset_detector::{detect, CharsetDetector, EncodingId, NoDetection};
use encoding_rs::Encoding;
use encoding_rs::{EUC_JP, EUC_KR, GB18030, ISO_8859_7, SHIFT_JIS, UTF_8, WINDOWS_1251, WINDOWS_1252};

type EncodedFixture = (
    &'static str,
    &'static Encoding,
    &'static str,
    EncodingId,
    Option<&'static str>,
);

static ENCODED_FIXTURES: &[EncodedFixture] = &[
    (
        "russian-1251",
        WINDOWS_1251,
        "Привет, это русский текст о погоде и природе. Сегодня хорошая погода, и мы гуляем в парке около реки.",
        EncodingId::Windows1251,
        Some("ru"),
    ),
    (
        "french-1252",
        WINDOWS_1252,
        "Le café près de la fenêtre était agréable et les personnes que nous avons vues passaient lentement dans la rue pendant que la mer restait calme.",
        EncodingId::Windows1252,
        Some("fr"),
    ),
    (
        "greek-8859-7",
        ISO_8859_7,
        "Αυτό είναι ένα ελληνικό κείμενο για τον καιρό και τη θάλασσα κοντά στο νησί.",
        EncodingId::Iso8859_7,
        Some("el"),
    ),
    (
        "chinese-gb18030",
        GB18030,
        "的一是了不在人中国我 的一是了不在人中国我 的一是了不在人中国我",
        EncodingId::Gb18030,
        Some("zh"),
    ),
    (
        "japanese-shift-jis",
        SHIFT_JIS,
        "これはにほんごのてすとです これはにほんごのてすとです",
        EncodingId::ShiftJis,
        Some("ja"),
    ),
    (
        "japanese-euc-jp",
        EUC_JP,
        "これはにほんごのてすとです これはにほんごのてすとです",
        EncodingId::EucJp,
        Some("ja"),
    ),
    (
        "korean-euc-kr",
        EUC_KR,
        "가다이 가다이 가다이 가다이",
        EncodingId::EucKr,
        Some("ko"),
    ),
    (
        "russian-utf8",
        UTF_8,
        "Привет, это русский текст о погоде и природе. Сегодня хорошая погода, и мы гуляем в парке около реки.",
        EncodingId::Utf8,
        Some("ru"),
    ),
];

type BomFixture = (&'static str, &'static [u8], EncodingId);

const BOM_FIXTURES: &[BomFixture] = &[
    ("utf-8 bom", &[0xEF, 0xBB, 0xBF], EncodingId::Utf8),
    (
        "utf-8 bom with trailing garbage",
        &[0xEF, 0xBB, 0xBF, 0xFF, 0x00, 0x81],
        EncodingId::Utf8,
    ),
    ("utf-16le bom", &[0xFF, 0xFE], EncodingId::Utf16Le),
    ("utf-16be bom", &[0xFE, 0xFF], EncodingId::Utf16Be),
    (
        "utf-32le bom",
        &[0xFF, 0xFE, 0x00, 0x00],
        EncodingId::Utf32Le,
    ),
    (
        "utf-32be bom",
        &[0x00, 0x00, 0xFE, 0xFF],
        EncodingId::Utf32Be,
    ),
];

fn detector() -> CharsetDetector {
    CharsetDetector::new().expect("table validation")
}

fn assert_ranked(name: &str, detector: &CharsetDetector, data: &[u8]) {
    let all = detector.detect_all(data);
    for win in all.windows(2) {
        assert!(
            win[0].confidence >= win[1].confidence,
            "candidates out of order for {}: {:?}",
            name,
            all
        );
    }
    for candidate in &all {
        assert!(
            candidate.confidence > 0.0 && candidate.confidence <= 1.0,
            "confidence out of range for {} in {}: {}",
            candidate.charset,
            name,
            candidate.confidence
        );
    }
}

fn assert_encoded_fixture(fixture: &EncodedFixture) {
    let (name, encoding, text, expected_charset, expected_language) = *fixture;
    let (bytes, _, had_encode_errors) = encoding.encode(text);
    assert!(!had_encode_errors, "fixture {} failed to encode", name);

    let det = detector();
    let best = det
        .detect_best(&bytes)
        .unwrap_or_else(|e| panic!("no detection for {}: {}", name, e));
    assert_eq!(
        expected_charset, best.charset,
        "charset mismatch for {}",
        name
    );
    assert_eq!(
        expected_language, best.language,
        "language mismatch for {}",
        name
    );

    // Round-trip sanity: the reported encoding must decode the original
    // bytes without errors for a single-encoding fixture.
    let decoder = best
        .charset
        .encoding()
        .unwrap_or_else(|| panic!("no decoder for top candidate of {}", name));
    let (_, had_decode_errors) = decoder.decode_without_bom_handling(&bytes);
    assert!(
        !had_decode_errors,
        "top candidate for {} cannot decode the input",
        name
    );

    assert_ranked(name, &det, &bytes);

    // Same input twice yields the identical result set
    assert_eq!(
        det.detect_all(&bytes),
        det.detect_all(&bytes),
        "nondeterministic result set for {}",
        name
    );
}

fn utf16_bytes(text: &str, little_endian: bool) -> Vec<u8> {
    text.encode_utf16()
        .flat_map(|unit| {
            if little_endian {
                unit.to_le_bytes()
            } else {
                unit.to_be_bytes()
            }
        })
        .collect()
}

#[test]
fn encoded_fixtures_detect_as_sources() {
    for fixture in ENCODED_FIXTURES {
        assert_encoded_fixture(fixture);
    }
}

#[test]
fn bom_always_wins_with_full_confidence() {
    let det = detector();
    for (name, bytes, expected) in BOM_FIXTURES {
        let best = det
            .detect_best(bytes)
            .unwrap_or_else(|e| panic!("no detection for {}: {}", name, e));
        assert_eq!(*expected, best.charset, "charset mismatch for {}", name);
        assert!(
            (best.confidence - 1.0).abs() < f32::EPSILON,
            "expected full confidence for {}, got {}",
            name,
            best.confidence
        );
        assert_ranked(name, &det, bytes);
    }
}

#[test]
fn empty_input_yields_fallback_not_error() {
    let det = detector();

    let all = det.detect_all(b"");
    assert_eq!(1, all.len(), "expected only the fallback candidate");
    assert_eq!(EncodingId::Windows1252, all[0].charset);
    assert!(
        (all[0].confidence - 0.2).abs() < 1e-6,
        "unexpected baseline confidence {}",
        all[0].confidence
    );

    assert_eq!(Err(NoDetection::EmptyInput), det.detect_best(b""));
}

#[test]
fn unclassifiable_input_is_distinct_from_empty() {
    let det = detector();
    // 0x98 is unassigned in windows-1251, a stray continuation byte in
    // UTF-8, and an incomplete lead in every double-byte scheme.
    assert_eq!(Err(NoDetection::Unclassified), det.detect_best(&[0x98]));
    assert!(det.detect_all(&[0x98]).is_empty());
}

#[test]
fn pure_ascii_is_not_a_multi_byte_encoding() {
    let det = detector();
    let input = b"The quick brown fox jumps over the lazy dog.";

    let best = det.detect_best(input).expect("ascii detection");
    assert_eq!(EncodingId::Ascii, best.charset);
    assert!(
        best.confidence > 0.9,
        "ascii confidence too low: {}",
        best.confidence
    );
    assert_eq!(Some("en"), best.language);
    assert_ranked("pure-ascii", &det, input);
}

#[test]
fn bomless_utf16_is_detected_from_zero_distribution() {
    let det = detector();
    let text = "Hello, world! This is plain text.";

    let le = utf16_bytes(text, true);
    let best = det.detect_best(&le).expect("utf-16le detection");
    assert_eq!(EncodingId::Utf16Le, best.charset);

    let be = utf16_bytes(text, false);
    let best = det.detect_best(&be).expect("utf-16be detection");
    assert_eq!(EncodingId::Utf16Be, best.charset);
}

#[test]
fn longer_sample_wins_the_language_vote() {
    let det = detector();

    let english = "the weather these days has been rather warm and the nights \
                   have been clear with the moon high over the water in the north";
    let french = "le petit dejeuner pres de la mer";

    let mut mostly_english = String::new();
    mostly_english.push_str(english);
    mostly_english.push(' ');
    mostly_english.push_str(french);
    let best = det
        .detect_best(mostly_english.as_bytes())
        .expect("mixed detection");
    assert_eq!(EncodingId::Ascii, best.charset);
    assert_eq!(Some("en"), best.language, "english sample should dominate");

    let french_long = "le gouvernement veut que les autres quartiers parlent de la \
                       qualite de la musique et que le public puisse les ecouter \
                       quelque part pres de la mer";
    let english_short = "the dog";

    let mut mostly_french = String::new();
    mostly_french.push_str(french_long);
    mostly_french.push(' ');
    mostly_french.push_str(english_short);
    let best = det
        .detect_best(mostly_french.as_bytes())
        .expect("mixed detection");
    assert_eq!(Some("fr"), best.language, "french sample should dominate");
}

#[test]
fn one_shot_detect_reports_utf8_validity() {
    let report = detect(b"").expect("detector construction");
    assert!(report.best.is_none());
    assert!(report.is_valid_utf8);

    let report = detect("café".as_bytes()).expect("detector construction");
    let best = report.best.expect("utf-8 text detects");
    assert_eq!(EncodingId::Utf8, best.charset);
    assert!(report.is_valid_utf8);

    let report = detect(&[0xC0, 0x20]).expect("detector construction");
    assert!(!report.is_valid_utf8);
}
