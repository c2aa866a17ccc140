//! Language guessing over best-effort decoded text.

use log::trace;

use super::models::EncodingId;

/// Bigram collection stops here; language signal saturates long before.
const MAX_BIGRAMS: u32 = 4096;

/// Divisor turning an accumulated bigram weight sum into a `[0, 1]`
/// score. Chosen so that ordinary prose in a matching language lands
/// around 0.4-0.7.
const SCORE_NORM: f32 = 28.0;

/// A language guess with the score that backs it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LanguageGuess {
    pub code: &'static str,
    pub score: f32,
}

/// Guess the language of `data` interpreted under `id`.
///
/// Decoding is best-effort: undecodable byte runs become replacement
/// characters, which terminate the current word and are otherwise
/// ignored. Returns `None` when the encoding implies no script, has no
/// decoder, or the decoded text contains no letter pairs at all.
pub(crate) fn guess(id: EncodingId, data: &[u8]) -> Option<LanguageGuess> {
    if let Some(code) = id.fixed_language() {
        return Some(LanguageGuess { code, score: 1.0 });
    }
    let models = id.language_models();
    if models.is_empty() {
        return None;
    }
    let encoding = id.encoding()?;
    let (text, _, _) = encoding.decode(data);

    let mut sums = vec![0u32; models.len()];
    let mut pairs = 0u32;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if pairs >= MAX_BIGRAMS {
            break;
        }
        let c = fold(c);
        if c != char::REPLACEMENT_CHARACTER && c.is_alphabetic() {
            if let Some(p) = prev {
                pairs += 1;
                for (sum, model) in sums.iter_mut().zip(models) {
                    *sum += model.weight(p, c);
                }
            }
            prev = Some(c);
        } else {
            prev = None;
        }
    }
    if pairs == 0 {
        return None;
    }

    let (best, sum) = sums
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))?;
    let guess = LanguageGuess {
        code: models[best].code,
        score: (*sum as f32 / (pairs as f32 * SCORE_NORM)).min(1.0),
    };
    trace!(
        "language guess for {}: {} ({:.3} over {} bigrams)",
        id,
        guess.code,
        guess.score,
        pairs
    );
    Some(guess)
}

/// Case folding for bigram lookup. Greek gets two extra steps: final
/// sigma joins medial sigma, and the tonos-accented vowels join their
/// base letters so the tables stay accent-free.
fn fold(c: char) -> char {
    let c = c.to_lowercase().next().unwrap_or(c);
    match c {
        'ς' => 'σ',
        'ά' => 'α',
        'έ' => 'ε',
        'ή' => 'η',
        'ί' => 'ι',
        'ό' => 'ο',
        'ύ' => 'υ',
        'ώ' => 'ω',
        _ => c,
    }
}
