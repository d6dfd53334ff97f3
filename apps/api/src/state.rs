use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelClient;
use crate::notifier::WebhookNotifier;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when GEMINI_API_KEY is not configured; analysis is then disabled.
    pub model: Option<Arc<dyn ModelClient>>,
    /// Unconfigured notifiers report `NotConfigured` without touching the network.
    pub notifier: WebhookNotifier,
}
