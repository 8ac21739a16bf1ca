use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of an Ollama-compatible text generator; generation is off when unset
    #[serde(default)]
    pub ollama_url: Option<String>,

    #[serde(default = "default_ollama_model")]
    pub ollama_model: String,

    /// Base URL of a Hugging Face style inference API; intent analysis
    /// uses the static fallback when unset
    #[serde(default)]
    pub classifier_url: Option<String>,

    #[serde(default)]
    pub classifier_api_key: Option<String>,

    #[serde(default = "default_sentiment_model")]
    pub sentiment_model: String,

    #[serde(default = "default_zero_shot_model")]
    pub zero_shot_model: String,

    /// Upper bound for every outbound call
    #[serde(default = "default_external_timeout_secs")]
    pub external_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_ollama_model() -> String {
    "llama3.1".to_string()
}

fn default_sentiment_model() -> String {
    "distilbert-base-uncased-finetuned-sst-2-english".to_string()
}

fn default_zero_shot_model() -> String {
    "facebook/bart-large-mnli".to_string()
}

fn default_external_timeout_secs() -> u64 {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn external_timeout(&self) -> Duration {
        Duration::from_secs(self.external_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
