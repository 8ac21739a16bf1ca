pub mod catalog;
pub mod collaborative;
pub mod content;
pub mod enrichment;
pub mod filter;
pub mod generation;
pub mod intent;
pub mod providers;
pub mod ranker;
pub mod recommendations;
pub mod sharing;

pub use recommendations::{RecommendationEngine, TOP_K};
