//! farm-advisor HTTP Server
//!
//! Answers farmers' questions on `POST /chat`: market prices from a static
//! table, everything else through an OpenAI-compatible model.

use std::sync::Arc;

use advisor_core::{GenerationOptions, LlmProvider, MockProvider};
use advisor_runtime::OpenAiProvider;
use anyhow::Context;
use farm_advisor::{AdvisoryDesk, PriceTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_server::{
    AppState,
    config::{ProviderKind, ServerConfig},
    startup::{bind_with_fallback, build_router},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Initialize LLM provider
    let provider: Arc<dyn LlmProvider> = match config.provider {
        ProviderKind::OpenAi => {
            let provider = OpenAiProvider::from_env()?;
            if !provider.has_api_key() {
                tracing::warn!("⚠ OPENAI_API_KEY not set - non-market questions will fail");
                tracing::warn!("  Set OPENAI_API_KEY in .env or use ADVISOR_PROVIDER=mock");
            }
            Arc::new(provider)
        }
        ProviderKind::Mock => {
            tracing::info!("Using mock provider (offline mode)");
            Arc::new(
                config
                    .mock_reply
                    .clone()
                    .map_or_else(MockProvider::default, MockProvider::replying),
            )
        }
    };

    // Verify provider connection
    match provider.health_check().await {
        Ok(true) => tracing::info!("✓ Connected to {}", provider.name()),
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ {} not reachable - advisory answers will fail", provider.name());
        }
    }

    // Load market prices
    let prices = match &config.market_prices_file {
        Some(path) => PriceTable::from_file(path)
            .with_context(|| format!("loading market prices from {}", path.display()))?,
        None => PriceTable::standard(),
    };

    tracing::info!("Market prices for {} items:", prices.len());
    for item in prices.items() {
        if let Some(price) = prices.get(item) {
            tracing::info!("  • {}: {}", item, price);
        }
    }

    let desk = AdvisoryDesk::new(provider, prices)
        .with_generation(GenerationOptions::default().with_model(config.model.as_str()));

    let app = build_router(AppState::new(desk), &config.static_dir);

    // Start server
    let listener = bind_with_fallback(&config.host, config.port)
        .await
        .with_context(|| format!("binding {}:{}", config.host, config.port))?;
    let addr = listener.local_addr()?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("✅ farm-advisor running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  POST /chat   - Ask a question");
    tracing::info!("  GET  /*      - Static files from {}", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
