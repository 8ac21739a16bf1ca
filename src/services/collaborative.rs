//! Simulated collaborative filtering
//!
//! There are no real users. A handful of synthetic segments carry rating
//! histories, and a request borrows the opinions of the segments its
//! interests resemble plus a random sample of the rest.

use rand::Rng;
use std::collections::HashMap;

use crate::models::{CatalogEntry, GiftRequest, Interaction, UserSegment};

/// Probability that a segment joins the peer group without an interest match
pub const RANDOM_SEGMENT_PROBABILITY: f64 = 0.3;

/// Score used when no peer opinion exists
pub const NEUTRAL_SCORE: f64 = 0.5;

const MAX_RATING: f64 = 5.0;

/// Interactions kept per segment; the oldest are evicted first
pub const MAX_INTERACTIONS_PER_SEGMENT: usize = 1_000;

/// Per-segment rating histories
#[derive(Debug, Clone, Default)]
pub struct InteractionHistory {
    segments: HashMap<UserSegment, Vec<Interaction>>,
}

impl InteractionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History shipped with the service
    pub fn seeded() -> Self {
        let mut history = Self::new();

        for (name, rating, purchased) in [
            ("Wireless Noise-Cancelling Earbuds", 5, true),
            ("Smart Fitness Watch", 4, true),
            ("Mechanical Keyboard", 5, true),
            ("Gaming Headset Pro", 4, false),
            ("Bluetooth Speaker Premium", 3, false),
        ] {
            history.record(UserSegment::TechEnthusiast, Interaction::new(name, rating, purchased));
        }

        for (name, rating, purchased) in [
            ("Designer Leather Handbag", 5, true),
            ("Silk Scarf", 4, true),
            ("Scented Candle Gift Set", 4, false),
            ("Luxury Spa Day Package", 5, false),
        ] {
            history.record(UserSegment::FashionLover, Interaction::new(name, rating, purchased));
        }

        for (name, rating, purchased) in [
            ("Premium Yoga Mat Set", 5, true),
            ("Aromatherapy Diffuser Set", 5, true),
            ("Resistance Band Training Kit", 4, false),
            ("Luxury Spa Day Package", 4, false),
            ("Smart Fitness Watch", 3, false),
        ] {
            history.record(UserSegment::WellnessSeeker, Interaction::new(name, rating, purchased));
        }

        history
    }

    /// Appends an interaction to a segment's history
    ///
    /// Each segment keeps at most [`MAX_INTERACTIONS_PER_SEGMENT`] entries;
    /// recording past that evicts the oldest.
    pub fn record(&mut self, segment: UserSegment, interaction: Interaction) {
        let interactions = self.segments.entry(segment).or_default();
        interactions.push(interaction);

        let overflow = interactions.len().saturating_sub(MAX_INTERACTIONS_PER_SEGMENT);
        if overflow > 0 {
            interactions.drain(..overflow);
        }
    }

    pub fn interactions(&self, segment: UserSegment) -> &[Interaction] {
        self.segments
            .get(&segment)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ratings a segment recorded for an exact item name
    fn ratings_for<'a>(&'a self, segment: UserSegment, item_name: &'a str) -> impl Iterator<Item = u8> + 'a {
        self.interactions(segment)
            .iter()
            .filter(move |i| i.item_name == item_name)
            .map(|i| i.rating)
    }
}

/// Picks the peer segments for a request
///
/// A segment is chosen when the lower-cased interests contain its keyword,
/// or with probability [`RANDOM_SEGMENT_PROBABILITY`] otherwise. One draw is
/// taken per segment regardless, so the random stream advances identically
/// for every request.
pub fn select_similar_segments<R: Rng>(request: &GiftRequest, rng: &mut R) -> Vec<UserSegment> {
    let interests = request.interests.to_lowercase();

    UserSegment::ALL
        .into_iter()
        .filter(|segment| {
            let sampled = rng.random_bool(RANDOM_SEGMENT_PROBABILITY);
            interests.contains(segment.keyword()) || sampled
        })
        .collect()
}

/// Mean peer rating for an entry, normalised to `0.0..=1.0`
///
/// Returns [`NEUTRAL_SCORE`] when no segment was selected or none of the
/// selected segments rated this entry.
pub fn collaborative_score(
    entry: &CatalogEntry,
    segments: &[UserSegment],
    history: &InteractionHistory,
) -> f64 {
    if segments.is_empty() {
        return NEUTRAL_SCORE;
    }

    let ratings: Vec<u8> = segments
        .iter()
        .flat_map(|segment| history.ratings_for(*segment, entry.name))
        .collect();

    if ratings.is_empty() {
        return NEUTRAL_SCORE;
    }

    let mean = ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64;
    mean / MAX_RATING
}
