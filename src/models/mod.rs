use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod catalog;
pub mod gift_request;
pub mod interaction;
pub mod recommendation;
pub mod sharing;

pub use catalog::{CatalogEntry, Category, Sentiment};
pub use gift_request::{AgeGroup, GiftRequest};
pub use interaction::{FeedbackRequest, Interaction, UserSegment};
pub use recommendation::{GeneratedGift, Recommendation, ScoredCandidate};
pub use sharing::{GroupGiftRequest, GroupGiftResponse, ShareRequest, ShareResponse};

// ============================================================================
// Budget Buckets
// ============================================================================

/// Inclusive price range in whole rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

/// One of the five budget options offered by the gift finder form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetBucket {
    UnderOneThousand,
    OneToFiveThousand,
    FiveToTenThousand,
    TenToTwentyFiveThousand,
    AboveTwentyFiveThousand,
}

impl BudgetBucket {
    pub const ALL: [BudgetBucket; 5] = [
        BudgetBucket::UnderOneThousand,
        BudgetBucket::OneToFiveThousand,
        BudgetBucket::FiveToTenThousand,
        BudgetBucket::TenToTwentyFiveThousand,
        BudgetBucket::AboveTwentyFiveThousand,
    ];

    /// Label exactly as submitted by the form
    pub fn label(&self) -> &'static str {
        match self {
            BudgetBucket::UnderOneThousand => "Under ₹1,000",
            BudgetBucket::OneToFiveThousand => "₹1,000 - ₹5,000",
            BudgetBucket::FiveToTenThousand => "₹5,000 - ₹10,000",
            BudgetBucket::TenToTwentyFiveThousand => "₹10,000 - ₹25,000",
            BudgetBucket::AboveTwentyFiveThousand => "Above ₹25,000",
        }
    }

    pub fn range(&self) -> PriceRange {
        match self {
            BudgetBucket::UnderOneThousand => PriceRange::new(500, 1_000),
            BudgetBucket::OneToFiveThousand => PriceRange::new(1_000, 5_000),
            BudgetBucket::FiveToTenThousand => PriceRange::new(5_000, 10_000),
            BudgetBucket::TenToTwentyFiveThousand => PriceRange::new(10_000, 25_000),
            BudgetBucket::AboveTwentyFiveThousand => PriceRange::new(25_000, 50_000),
        }
    }

    /// Option value sent by the older select-based form, e.g. `under-50`
    pub fn form_value(&self) -> &'static str {
        match self {
            BudgetBucket::UnderOneThousand => "under-50",
            BudgetBucket::OneToFiveThousand => "50-100",
            BudgetBucket::FiveToTenThousand => "100-200",
            BudgetBucket::TenToTwentyFiveThousand => "200-500",
            BudgetBucket::AboveTwentyFiveThousand => "over-500",
        }
    }

    /// Matches either the ₹ label or the form option value
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.label() == label || bucket.form_value() == label)
    }

    /// Resolves a free-form budget label, defaulting to the mid-range bucket
    pub fn resolve(label: &str) -> Self {
        Self::from_label(label).unwrap_or(BudgetBucket::OneToFiveThousand)
    }
}

impl Display for BudgetBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Intent Analysis
// ============================================================================

/// Coarse intent labels used for zero-shot classification
pub const INTENT_LABELS: [&str; 6] = ["luxury", "practical", "creative", "tech", "wellness", "social"];

/// Result of analysing the free-text parts of a gift request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntentAnalysis {
    pub sentiment_label: String,
    pub sentiment_score: f64,
    pub primary_intent: String,
    pub intent_confidence: f64,
    pub emotional_tone: String,
}

impl IntentAnalysis {
    /// Constant substituted whenever the classifier is absent or fails
    pub fn fallback() -> Self {
        Self {
            sentiment_label: "POSITIVE".to_string(),
            sentiment_score: 0.8,
            primary_intent: "practical".to_string(),
            intent_confidence: 0.8,
            emotional_tone: "enthusiastic".to_string(),
        }
    }
}

impl Default for IntentAnalysis {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_labels_round_trip() {
        for bucket in BudgetBucket::ALL {
            assert_eq!(BudgetBucket::from_label(bucket.label()), Some(bucket));
        }
    }

    #[test]
    fn test_form_option_values_resolve_to_buckets() {
        assert_eq!(BudgetBucket::resolve("under-50"), BudgetBucket::UnderOneThousand);
        assert_eq!(BudgetBucket::resolve("50-100"), BudgetBucket::OneToFiveThousand);
        assert_eq!(BudgetBucket::resolve("100-200"), BudgetBucket::FiveToTenThousand);
        assert_eq!(BudgetBucket::resolve("200-500"), BudgetBucket::TenToTwentyFiveThousand);
        assert_eq!(BudgetBucket::resolve(" over-500 "), BudgetBucket::AboveTwentyFiveThousand);
        for bucket in BudgetBucket::ALL {
            assert_eq!(BudgetBucket::from_label(bucket.form_value()), Some(bucket));
        }
    }

    #[test]
    fn test_unknown_budget_defaults_to_mid_range() {
        let bucket = BudgetBucket::resolve("$50 - $100");
        assert_eq!(bucket, BudgetBucket::OneToFiveThousand);
        assert_eq!(bucket.range(), PriceRange::new(1_000, 5_000));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::new(1_000, 5_000);
        assert!(range.contains(1_000));
        assert!(range.contains(5_000));
        assert!(!range.contains(999));
        assert!(!range.contains(5_001));
    }

    #[test]
    fn test_fallback_intent() {
        let intent = IntentAnalysis::fallback();
        assert_eq!(intent.sentiment_label, "POSITIVE");
        assert_eq!(intent.sentiment_score, 0.8);
        assert_eq!(intent.primary_intent, "practical");
        assert_eq!(intent.intent_confidence, 0.8);
        assert_eq!(intent.emotional_tone, "enthusiastic");
    }
}
