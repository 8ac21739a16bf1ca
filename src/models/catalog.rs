use serde::Serialize;
use std::fmt::Display;

use super::{AgeGroup, BudgetBucket};

/// Top-level catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Electronics,
    Gaming,
    Books,
    Fitness,
    Music,
    ArtsAndCrafts,
    Food,
    Travel,
    Wellness,
    Fashion,
    Home,
    Experiences,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Gaming => "Gaming",
            Category::Books => "Books & Learning",
            Category::Fitness => "Sports & Fitness",
            Category::Music => "Music",
            Category::ArtsAndCrafts => "Arts & Crafts",
            Category::Food => "Food & Cooking",
            Category::Travel => "Travel & Adventure",
            Category::Wellness => "Health & Wellness",
            Category::Fashion => "Fashion",
            Category::Home => "Home & Living",
            Category::Experiences => "Experiences",
        }
    }

    /// Card image shown next to the recommendation
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Electronics => "🎧",
            Category::Gaming => "🎮",
            Category::Books => "📚",
            Category::Fitness => "🏋️",
            Category::Music => "🎵",
            Category::ArtsAndCrafts => "🎨",
            Category::Food => "🍳",
            Category::Travel => "🧳",
            Category::Wellness => "🧘",
            Category::Fashion => "👜",
            Category::Home => "🏡",
            Category::Experiences => "🎟️",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Emotional register of a gift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Practical,
    Luxury,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Practical => "practical",
            Sentiment::Luxury => "luxury",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// A static catalog item. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: Category,
    pub subcategory: &'static str,
    pub price_range: BudgetBucket,
    pub age_groups: &'static [AgeGroup],
    pub occasions: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub sentiment: Sentiment,
    /// Request-independent desirability prior in `0.0..=1.0`
    pub popularity: f64,
    pub base_price: u32,
    pub description: &'static str,
}

impl CatalogEntry {
    pub fn suits_age(&self, group: AgeGroup) -> bool {
        self.age_groups
            .iter()
            .any(|g| *g == group || *g == AgeGroup::All)
    }

    pub fn suits_occasion(&self, occasion: &str) -> bool {
        self.occasions.iter().any(|o| *o == occasion)
    }
}
