use std::cmp::Ordering;

use crate::models::ScoredCandidate;

const CONTENT_WEIGHT: f64 = 0.6;
const COLLABORATIVE_WEIGHT: f64 = 0.3;
const POPULARITY_WEIGHT: f64 = 0.1;

/// Blends the content score, collaborative score and popularity prior
pub fn combined_score(candidate: &ScoredCandidate<'_>) -> f64 {
    CONTENT_WEIGHT * candidate.content_score
        + COLLABORATIVE_WEIGHT * candidate.collaborative_score
        + POPULARITY_WEIGHT * candidate.entry.popularity
}

/// Assigns relevance scores and orders candidates best first
///
/// The sort is stable: candidates with equal relevance keep their input
/// (catalog) order.
pub fn rank(mut candidates: Vec<ScoredCandidate<'_>>) -> Vec<ScoredCandidate<'_>> {
    for candidate in &mut candidates {
        candidate.relevance_score = combined_score(candidate);
    }

    candidates.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
    });

    candidates
}
