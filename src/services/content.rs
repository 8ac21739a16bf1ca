use crate::models::{CatalogEntry, GiftRequest, IntentAnalysis, Sentiment};

const INTEREST_WEIGHT: f64 = 0.4;
const AGE_WEIGHT: f64 = 0.2;
const OCCASION_WEIGHT: f64 = 0.2;
const INTENT_WEIGHT: f64 = 0.1;
const POPULARITY_WEIGHT: f64 = 0.1;

/// Content-based similarity between a catalog entry and a request
///
/// Weighted sum of interest overlap, age-group match, exact occasion match,
/// intent alignment and the entry's popularity prior. The weights sum to
/// 1.0, so the result lies in `0.0..=1.0`; the final clamp only absorbs
/// float drift.
pub fn content_score(entry: &CatalogEntry, request: &GiftRequest, intent: &IntentAnalysis) -> f64 {
    let mut score = INTEREST_WEIGHT * interest_overlap(entry, &request.interest_tokens());

    if entry.suits_age(request.age_group()) {
        score += AGE_WEIGHT;
    }

    if entry.suits_occasion(&request.occasion_key()) {
        score += OCCASION_WEIGHT;
    }

    if intent_aligned(entry.sentiment, &intent.primary_intent) {
        score += INTENT_WEIGHT;
    }

    score += POPULARITY_WEIGHT * entry.popularity;

    score.clamp(0.0, 1.0)
}

/// Share of matching interest tags
///
/// A tag matches when it and some request token contain one another. The
/// count is divided by the larger of the two set sizes.
pub fn interest_overlap(entry: &CatalogEntry, tokens: &[String]) -> f64 {
    let denominator = entry.interests.len().max(tokens.len());
    if denominator == 0 {
        return 0.0;
    }

    let matches = entry
        .interests
        .iter()
        .filter(|tag| {
            tokens
                .iter()
                .any(|token| tag.contains(token.as_str()) || token.contains(**tag))
        })
        .count();

    matches as f64 / denominator as f64
}

fn intent_aligned(sentiment: Sentiment, primary_intent: &str) -> bool {
    sentiment.as_str() == primary_intent.to_lowercase()
}
