//! Candidate ranking and tie-break policy.

use super::models::Candidate;

/// Order candidates by confidence descending, dropping anything that
/// scored exactly zero. Exact confidence ties fall back to the fixed
/// [`EncodingId`](super::models::EncodingId) priority order, so the
/// ranking is a deterministic total order for any input.
pub(crate) fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.retain(|c| c.confidence > 0.0);
    candidates.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.charset.priority().cmp(&b.charset.priority()))
    });
    candidates
}
