use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    models::{
        CatalogEntry, FeedbackRequest, GiftRequest, IntentAnalysis, Interaction, Recommendation,
        ScoredCandidate, UserSegment,
    },
    services::{
        catalog::{self, FALLBACK_GIFTS},
        collaborative::{collaborative_score, select_similar_segments, InteractionHistory},
        content::content_score,
        enrichment::{self, enrich},
        filter::filter_candidates,
        generation, intent,
        providers::{IntentClassifier, TextGenerator},
        ranker::rank,
    },
};

/// Number of recommendations returned per request
pub const TOP_K: usize = 4;

const LIKED_RATING: u8 = 5;
const DISLIKED_RATING: u8 = 1;

/// Hybrid gift recommender
///
/// Filters the static catalog, scores the survivors with a content-based and
/// a simulated collaborative signal, ranks them and enriches the top
/// [`TOP_K`]. Optional collaborators are injected; without them the engine
/// runs entirely on local data.
#[derive(Clone)]
pub struct RecommendationEngine {
    catalog: &'static [CatalogEntry],
    history: Arc<RwLock<InteractionHistory>>,
    classifier: Option<Arc<dyn IntentClassifier>>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(InteractionHistory::seeded())
    }
}

impl RecommendationEngine {
    /// Creates an engine over the built-in catalog with no external collaborators
    pub fn new(history: InteractionHistory) -> Self {
        Self {
            catalog: catalog::catalog(),
            history: Arc::new(RwLock::new(history)),
            classifier: None,
            generator: None,
        }
    }

    pub fn with_catalog(mut self, catalog: &'static [CatalogEntry]) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn history(&self) -> Arc<RwLock<InteractionHistory>> {
        self.history.clone()
    }

    /// Produces between one and [`TOP_K`] recommendations
    ///
    /// Never fails. Collaborator errors are logged and replaced with local
    /// fallbacks, and an empty candidate set yields the static fallback list.
    pub async fn generate_recommendations<R: Rng + Send>(
        &self,
        request: &GiftRequest,
        rng: &mut R,
    ) -> Vec<Recommendation> {
        if let Some(generator) = &self.generator {
            match generation::generate_gifts(generator.as_ref(), request).await {
                Ok(gifts) => return generation::into_recommendations(gifts, request, TOP_K),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        provider = generator.name(),
                        "Generation failed, using hybrid engine"
                    );
                }
            }
        }

        let intent = intent::analyze_intent(self.classifier.as_deref(), request).await;
        let history = self.history.read().await;

        self.recommend_hybrid(request, &intent, &history, rng)
    }

    /// Synchronous filter → score → rank → enrich pass
    pub fn recommend_hybrid<R: Rng>(
        &self,
        request: &GiftRequest,
        intent: &IntentAnalysis,
        history: &InteractionHistory,
        rng: &mut R,
    ) -> Vec<Recommendation> {
        let candidates = filter_candidates(self.catalog, request);

        if candidates.is_empty() {
            tracing::info!(
                budget = %request.budget,
                relationship = %request.relationship,
                "No catalog entries passed the filter, returning fallback list"
            );
            return fallback_recommendations(request, TOP_K);
        }

        let segments = select_similar_segments(request, rng);
        tracing::debug!(segments = ?segments, "Selected peer segments");

        let scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|entry| {
                ScoredCandidate::new(
                    entry,
                    content_score(entry, request, intent),
                    collaborative_score(entry, &segments, history),
                )
            })
            .collect();

        let mut ranked = rank(scored);
        ranked.truncate(TOP_K);

        for candidate in &ranked {
            tracing::debug!(
                name = candidate.entry.name,
                content = candidate.content_score,
                collaborative = candidate.collaborative_score,
                relevance = candidate.relevance_score,
                "Ranked candidate"
            );
        }

        let recommendations = enrich(&ranked, request, intent, rng);

        tracing::info!(
            count = recommendations.len(),
            intent = %intent.primary_intent,
            "Generated hybrid recommendations"
        );

        recommendations
    }

    /// Records a like or dislike against a user segment
    ///
    /// Only recognised segment ids are recorded; anything else is ignored.
    pub async fn submit_feedback(&self, feedback: &FeedbackRequest) {
        let Some(segment) = feedback.user_id.as_deref().and_then(UserSegment::from_key) else {
            tracing::debug!(
                gift_id = %feedback.gift_id,
                user_id = ?feedback.user_id,
                "Feedback without a known segment ignored"
            );
            return;
        };

        let rating = if feedback.liked {
            LIKED_RATING
        } else {
            DISLIKED_RATING
        };

        self.history
            .write()
            .await
            .record(segment, Interaction::new(feedback.item_name(), rating, false));

        tracing::info!(
            gift = %feedback.item_name(),
            segment = segment.key(),
            liked = feedback.liked,
            "Feedback recorded"
        );
    }
}

/// Static list returned when nothing in the catalog fits the request
pub fn fallback_recommendations(request: &GiftRequest, limit: usize) -> Vec<Recommendation> {
    let tags = request.interest_list();

    FALLBACK_GIFTS
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, gift)| {
            let (amazon_link, flipkart_link) = enrichment::shopping_links(gift.name);

            Recommendation {
                id: format!("fallback-{}", index + 1),
                name: gift.name.to_string(),
                description: gift.description.to_string(),
                price: enrichment::format_inr(gift.base_price),
                category: gift.category.to_string(),
                reason: format!(
                    "Carefully selected based on your preferences for a {}-year-old {}",
                    request.age, request.relationship
                ),
                image: format!(
                    "https://images.unsplash.com/400x300/?{}",
                    urlencoding::encode(gift.name)
                ),
                amazon_link,
                flipkart_link,
                numeric_price: gift.base_price,
                relevance_score: 0.8 - 0.1 * index as f64,
                tags: tags.clone(),
            }
        })
        .collect()
}
