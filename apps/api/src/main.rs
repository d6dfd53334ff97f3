mod analysis;
mod charts;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod notifier;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, ModelClient};
use crate::notifier::WebhookNotifier;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values, not on missing credentials)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (optional — analysis is disabled without a key)
    let model: Option<Arc<dyn ModelClient>> = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(llm))
        }
        None => {
            warn!("GEMINI_API_KEY not set; analysis is disabled");
            None
        }
    };

    // Initialize webhook notifier (unconfigured notifier never touches the network)
    let notifier = WebhookNotifier::new(config.webhook_url.clone())?;
    if config.webhook_configured() {
        info!("Webhook notifier ready");
    } else {
        warn!("N8N_WEBHOOK_URL not set; webhook delivery is disabled");
    }
    info!(
        "Features: analysis={}, webhook={}, identity policy={:?}",
        config.model_configured(),
        config.webhook_configured(),
        config.identity_policy
    );

    // Build app state
    let state = AppState {
        model,
        notifier,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
