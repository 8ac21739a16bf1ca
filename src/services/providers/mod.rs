//! Optional external collaborators
//!
//! The recommendation engine works without either of these. When configured
//! they are injected as trait objects, and every error they return is logged
//! and replaced with a local fallback by the caller.
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub mod huggingface;
pub mod ollama;

pub use huggingface::HuggingFaceClassifier;
pub use ollama::OllamaGenerator;

/// A label with its confidence, as returned by a classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Text classification capability used for intent analysis
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Binary sentiment of the text (POSITIVE / NEGATIVE)
    async fn sentiment(&self, text: &str) -> AppResult<LabelScore>;

    /// Best matching label out of [`crate::models::INTENT_LABELS`]
    async fn classify_intent(&self, text: &str) -> AppResult<LabelScore>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Free-form text generation capability
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Cheap probe run before every generation
    async fn is_available(&self) -> bool;

    /// Completes a prompt and returns the raw generated text
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
