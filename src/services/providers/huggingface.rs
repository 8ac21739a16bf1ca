/// Hugging Face inference API classifier
///
/// Sentiment uses a binary text-classification model; intent uses a
/// zero-shot model over the fixed intent label set.
///
/// API Flow:
/// 1. Sentiment: POST /models/{sentiment_model} → `[[{label, score}, ...]]`
/// 2. Intent: POST /models/{zero_shot_model} with candidate labels → `{labels, scores}`
use reqwest::Client as HttpClient;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::INTENT_LABELS,
    services::providers::{IntentClassifier, LabelScore},
};

#[derive(Clone)]
pub struct HuggingFaceClassifier {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
    sentiment_model: String,
    zero_shot_model: String,
}

/// Text-classification responses come either nested per input or flat
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SentimentResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

#[derive(Debug, Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

impl HuggingFaceClassifier {
    pub fn new(
        http_client: HttpClient,
        api_url: String,
        api_key: Option<String>,
        sentiment_model: String,
        zero_shot_model: String,
    ) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            sentiment_model,
            zero_shot_model,
        }
    }

    async fn infer<T: DeserializeOwned>(&self, model: &str, body: Value) -> AppResult<T> {
        let url = format!("{}/models/{}", self.api_url, model);

        let mut request = self.http_client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Inference API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(model = %model, response = %response_text, "Raw inference response");

        Ok(serde_json::from_str(&response_text)?)
    }
}

/// Highest-scoring label of a sentiment response
fn best_sentiment(response: SentimentResponse) -> Option<LabelScore> {
    let scores = match response {
        SentimentResponse::Nested(batches) => batches.into_iter().next()?,
        SentimentResponse::Flat(scores) => scores,
    };

    scores
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
}

/// Highest-scoring label of a zero-shot response
fn best_intent(response: ZeroShotResponse) -> Option<LabelScore> {
    response
        .labels
        .into_iter()
        .zip(response.scores)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(label, score)| LabelScore { label, score })
}

#[async_trait::async_trait]
impl IntentClassifier for HuggingFaceClassifier {
    async fn sentiment(&self, text: &str) -> AppResult<LabelScore> {
        let response: SentimentResponse = self
            .infer(&self.sentiment_model, json!({ "inputs": text }))
            .await?;

        let best = best_sentiment(response)
            .ok_or_else(|| AppError::ExternalApi("Empty sentiment response".to_string()))?;

        tracing::debug!(label = %best.label, score = best.score, "Sentiment classified");
        Ok(best)
    }

    async fn classify_intent(&self, text: &str) -> AppResult<LabelScore> {
        let body = json!({
            "inputs": text,
            "parameters": { "candidate_labels": INTENT_LABELS },
        });
        let response: ZeroShotResponse = self.infer(&self.zero_shot_model, body).await?;

        let best = best_intent(response)
            .ok_or_else(|| AppError::ExternalApi("Empty zero-shot response".to_string()))?;

        tracing::debug!(label = %best.label, score = best.score, "Intent classified");
        Ok(best)
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}
