use serde::{Deserialize, Serialize};

use super::CatalogEntry;

/// A gift suggestion as rendered on a card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display price, e.g. "₹2,450"
    pub price: String,
    pub category: String,
    pub reason: String,
    /// Emoji or image URL
    pub image: String,
    pub amazon_link: String,
    pub flipkart_link: String,
    pub numeric_price: u32,
    pub relevance_score: f64,
    pub tags: Vec<String>,
}

/// A catalog entry with its per-request scores
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub entry: &'a CatalogEntry,
    pub content_score: f64,
    pub collaborative_score: f64,
    /// Combined score assigned by the ranker
    pub relevance_score: f64,
}

impl<'a> ScoredCandidate<'a> {
    pub fn new(entry: &'a CatalogEntry, content_score: f64, collaborative_score: f64) -> Self {
        Self {
            entry,
            content_score,
            collaborative_score,
            relevance_score: 0.0,
        }
    }
}

/// Gift idea as returned by the text generator
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedGift {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub estimated_price: Option<String>,
}
