use axum::{extract::State, Json};
use serde::Serialize;

use crate::llm_client::MODEL;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FeatureStatus {
    pub configured: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub model: &'static str,
    pub gemini: FeatureStatus,
    pub webhook: FeatureStatus,
}

/// GET /api/v1/status
/// Reports which features are enabled by the current configuration.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let gemini = if state.model.is_some() {
        FeatureStatus {
            configured: true,
            message: "Gemini API Connected",
        }
    } else {
        FeatureStatus {
            configured: false,
            message: "Add GEMINI_API_KEY to secrets",
        }
    };

    let webhook = if state.notifier.is_configured() {
        FeatureStatus {
            configured: true,
            message: "n8n Webhook Ready",
        }
    } else {
        FeatureStatus {
            configured: false,
            message: "Add N8N_WEBHOOK_URL to secrets",
        }
    };

    Json(StatusResponse {
        model: MODEL,
        gemini,
        webhook,
    })
}
