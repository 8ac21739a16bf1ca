/// Ollama text generation provider
///
/// API Flow:
/// 1. Availability: GET /api/tags → any 2xx means the daemon is up
/// 2. Generation: POST /api/generate (non-streaming) → `{ "response": "..." }`
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    services::providers::TextGenerator,
};

const TEMPERATURE: f64 = 0.8;
const TOP_P: f64 = 0.9;
const MAX_TOKENS: u32 = 500;

#[derive(Clone)]
pub struct OllamaGenerator {
    http_client: HttpClient,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaGenerator {
    pub fn new(http_client: HttpClient, base_url: String, model: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    fn generate_request<'a>(&'a self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                max_tokens: MAX_TOKENS,
            },
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for OllamaGenerator {
    async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);

        match self.http_client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::info!(error = %e, provider = "ollama", "Generator not reachable");
                false
            }
        }
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(&self.generate_request(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Ollama API returned status {}: {}",
                status, body
            )));
        }

        let generated: GenerateResponse = response.json().await?;

        tracing::info!(
            model = %self.model,
            chars = generated.response.len(),
            provider = "ollama",
            "Generation completed"
        );

        Ok(generated.response)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}
