//! Diagnostics endpoints for checking the two external integrations by hand.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::ModelInfo;
use crate::notifier::{WebhookRecord, WebhookStatus};
use crate::state::AppState;

/// Prompt sent when checking that a listed model actually answers.
pub const GREETING_PROMPT: &str = "Say hello in one word";

#[derive(Debug, Serialize)]
pub struct ModelListResponse {
    pub models: Vec<ModelInfo>,
}

/// Outcome of one round trip to the first generation-capable model.
#[derive(Debug, Serialize)]
pub struct ModelCheckResponse {
    /// Model that was tried, without the `models/` prefix.
    pub model: Option<String>,
    pub ok: bool,
    pub reply: Option<String>,
    pub error: Option<String>,
}

/// GET /api/v1/models
///
/// Lists the Gemini models that support `generateContent` for the configured key.
pub async fn handle_list_models(
    State(state): State<AppState>,
) -> Result<Json<ModelListResponse>, AppError> {
    let model = state.model.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("GEMINI_API_KEY is not configured".to_string())
    })?;
    let models = model.list_generation_models().await?;
    Ok(Json(ModelListResponse { models }))
}

/// POST /api/v1/models/check
///
/// Sends a one-line prompt to the first listed generation model and reports
/// its reply or error. A failed generation is a result, not an HTTP error.
pub async fn handle_check_model(
    State(state): State<AppState>,
) -> Result<Json<ModelCheckResponse>, AppError> {
    let model = state.model.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("GEMINI_API_KEY is not configured".to_string())
    })?;

    let Some(first) = model.list_generation_models().await?.into_iter().next() else {
        return Ok(Json(ModelCheckResponse {
            model: None,
            ok: false,
            reply: None,
            error: Some("No model supports generateContent".to_string()),
        }));
    };
    let name = first.name.trim_start_matches("models/").to_string();

    let response = match model.generate_with(&name, GREETING_PROMPT).await {
        Ok(reply) => {
            info!("Model check succeeded: {name}");
            ModelCheckResponse {
                model: Some(name),
                ok: true,
                reply: Some(reply),
                error: None,
            }
        }
        Err(e) => {
            warn!("Model check failed for {name}: {e}");
            ModelCheckResponse {
                model: Some(name),
                ok: false,
                reply: None,
                error: Some(e.to_string()),
            }
        }
    };
    Ok(Json(response))
}

/// POST /api/v1/webhook/test
///
/// Sends a fixed sample record through the notifier and reports the outcome.
pub async fn handle_webhook_test(State(state): State<AppState>) -> Json<WebhookStatus> {
    let outcome = state.notifier.send(&WebhookRecord::sample()).await;
    Json(outcome.status())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::analyzer::stub::StubModel;
    use crate::analysis::models::IdentityPolicy;
    use crate::config::Config;
    use crate::llm_client::ModelClient;
    use crate::notifier::WebhookNotifier;

    fn state(model: Option<Arc<dyn ModelClient>>) -> AppState {
        AppState {
            config: Config {
                gemini_api_key: model.as_ref().map(|_| "key".to_string()),
                webhook_url: None,
                identity_policy: IdentityPolicy::Normalize,
                port: 0,
                rust_log: "info".to_string(),
            },
            model,
            notifier: WebhookNotifier::new(None).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_list_models_requires_credential() {
        let result = handle_list_models(State(state(None))).await;
        assert!(matches!(result, Err(AppError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_list_models_returns_backend_listing() {
        let model: Arc<dyn ModelClient> = Arc::new(StubModel::replying("{}"));
        let Json(body) = handle_list_models(State(state(Some(model)))).await.unwrap();
        assert_eq!(body.models.len(), 1);
        assert_eq!(body.models[0].name, "models/stub");
    }

    #[tokio::test]
    async fn test_check_sends_greeting_to_first_listed_model() {
        let stub = Arc::new(StubModel::replying("Hello"));
        let model: Arc<dyn ModelClient> = stub.clone();
        let Json(body) = handle_check_model(State(state(Some(model)))).await.unwrap();

        assert!(body.ok);
        assert_eq!(body.model.as_deref(), Some("stub"));
        assert_eq!(body.reply.as_deref(), Some("Hello"));
        assert_eq!(*stub.targets.lock().unwrap(), vec!["stub"]);
        assert_eq!(*stub.prompts.lock().unwrap(), vec![GREETING_PROMPT]);
    }

    #[tokio::test]
    async fn test_check_reports_generation_failure_as_result() {
        let model: Arc<dyn ModelClient> = Arc::new(StubModel::failing(429));
        let Json(body) = handle_check_model(State(state(Some(model)))).await.unwrap();

        assert!(!body.ok);
        assert!(body.reply.is_none());
        assert!(body.error.unwrap().contains("429"));
    }

    #[tokio::test]
    async fn test_check_requires_credential() {
        let result = handle_check_model(State(state(None))).await;
        assert!(matches!(result, Err(AppError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_webhook_test_without_url_is_not_delivered() {
        let Json(status) = handle_webhook_test(State(state(None))).await;
        assert!(!status.delivered);
    }
}
