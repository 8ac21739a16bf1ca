use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gift_finder_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{
        providers::{HuggingFaceClassifier, OllamaGenerator},
        RecommendationEngine,
    },
};

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gift_finder_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn build_engine(config: &Config) -> Result<RecommendationEngine> {
    let http_client = reqwest::Client::builder()
        .timeout(config.external_timeout())
        .build()?;

    let mut engine = RecommendationEngine::default();

    if let Some(url) = &config.classifier_url {
        tracing::info!(url = %url, "Intent classifier enabled");
        engine = engine.with_classifier(Arc::new(HuggingFaceClassifier::new(
            http_client.clone(),
            url.clone(),
            config.classifier_api_key.clone(),
            config.sentiment_model.clone(),
            config.zero_shot_model.clone(),
        )));
    }

    if let Some(url) = &config.ollama_url {
        tracing::info!(url = %url, model = %config.ollama_model, "Text generator enabled");
        engine = engine.with_generator(Arc::new(OllamaGenerator::new(
            http_client,
            url.clone(),
            config.ollama_model.clone(),
        )));
    }

    Ok(engine)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = Config::from_env()?;
    let engine = build_engine(&config)?;
    let app = create_router(AppState::new(engine));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Gift finder API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
