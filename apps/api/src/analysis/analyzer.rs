//! Resume Analyzer — one model round trip per analysis.
//!
//! Flow: build prompt → model.generate → strip fences → parse JSON → normalize identity.
//! No retry; only `score` is type-checked.

use tracing::{debug, info};

use crate::analysis::models::{AnalysisResult, IdentityPolicy, ModelReply};
use crate::analysis::prompts::build_analysis_prompt;
use crate::llm_client::{parse_json_reply, LlmError, ModelClient};

/// Scores `resume_text` against `job_description` using the hosted model.
pub async fn analyze_resume(
    resume_text: &str,
    job_description: &str,
    model: &dyn ModelClient,
    policy: IdentityPolicy,
) -> Result<AnalysisResult, LlmError> {
    let prompt = build_analysis_prompt(resume_text, job_description);
    debug!(
        "Analysis prompt built: resume={} chars, jd={} chars",
        resume_text.len(),
        job_description.len()
    );

    let reply = model.generate(&prompt).await?;
    let result = parse_analysis_reply(&reply, policy)?;

    info!(
        "Analysis parsed: score={}, skills={}, matching={}, missing={}",
        result.score,
        result.skills.len(),
        result.matching_skills.len(),
        result.missing_skills.len()
    );
    Ok(result)
}

/// Parses a raw model reply into a normalized `AnalysisResult`.
pub fn parse_analysis_reply(
    reply: &str,
    policy: IdentityPolicy,
) -> Result<AnalysisResult, LlmError> {
    let parsed: ModelReply = parse_json_reply(reply)?;
    Ok(parsed.into_result(policy))
}

#[cfg(test)]
pub(crate) mod stub {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, ModelClient, ModelInfo};

    /// Model backend that answers every prompt with a canned reply.
    pub struct StubModel {
        reply: Result<String, u16>,
        pub prompts: Mutex<Vec<String>>,
        /// Model names each prompt was addressed to.
        pub targets: Mutex<Vec<String>>,
    }

    impl StubModel {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
                targets: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
                targets: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ModelClient for StubModel {
        async fn generate_with(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
            self.targets.lock().unwrap().push(model.to_string());
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "stub failure".to_string(),
                }),
            }
        }

        async fn list_generation_models(&self) -> Result<Vec<ModelInfo>, LlmError> {
            Ok(vec![ModelInfo {
                name: "models/stub".to_string(),
                display_name: None,
                supported_generation_methods: vec!["generateContent".to_string()],
            }])
        }
    }

    pub const FENCED_REPLY: &str = "```json\n{\"score\":80,\"name\":\"\",\"email\":\"N/A\",\"experience\":\"3 years\",\"skills\":[\"Go\",\"SQL\"],\"matching_skills\":[\"Go\"],\"missing_skills\":[\"SQL\"],\"summary\":\"Good fit.\"}\n```";
}

#[cfg(test)]
mod tests {
    use super::stub::{StubModel, FENCED_REPLY};
    use super::*;
    use crate::analysis::models::UNKNOWN_IDENTITY;

    #[tokio::test]
    async fn test_fenced_reply_parses_and_normalizes() {
        let model = StubModel::replying(FENCED_REPLY);
        let result = analyze_resume("resume", "Go backend role", &model, IdentityPolicy::Normalize)
            .await
            .unwrap();

        assert_eq!(result.score, 80);
        assert_eq!(result.name, UNKNOWN_IDENTITY);
        assert_eq!(result.email, UNKNOWN_IDENTITY);
        assert_eq!(result.experience, "3 years");
        assert_eq!(result.skills, vec!["Go", "SQL"]);
        assert_eq!(result.matching_skills, vec!["Go"]);
        assert_eq!(result.missing_skills, vec!["SQL"]);
        assert_eq!(result.summary, "Good fit.");
    }

    #[tokio::test]
    async fn test_preserve_policy_keeps_raw_identity() {
        let model = StubModel::replying(FENCED_REPLY);
        let result = analyze_resume("resume", "Go backend role", &model, IdentityPolicy::Preserve)
            .await
            .unwrap();

        assert_eq!(result.name, "");
        assert_eq!(result.email, "N/A");
    }

    #[tokio::test]
    async fn test_one_model_call_with_inputs_embedded() {
        let model = StubModel::replying(r#"{"score": 12}"#);
        analyze_resume("", "Data engineer, Spark", &model, IdentityPolicy::Normalize)
            .await
            .unwrap();

        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Data engineer, Spark"));
        assert_eq!(*model.targets.lock().unwrap(), vec![crate::llm_client::MODEL]);
    }

    #[tokio::test]
    async fn test_garbage_reply_is_parse_error() {
        let model = StubModel::replying("Sure! Here is my analysis: the candidate is great.");
        let err = analyze_resume("resume", "jd", &model, IdentityPolicy::Normalize)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_model_failure_surfaces_unchanged() {
        let model = StubModel::failing(500);
        let err = analyze_resume("resume", "jd", &model, IdentityPolicy::Normalize)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 500, .. }));
    }

    #[test]
    fn test_loosely_typed_fields_still_parse() {
        let reply = r#"{"score":70,"name":"N/A","email":"","experience":5,"skills":["Go",null],"matching_skills":["Go"],"missing_skills":[],"summary":"ok"}"#;
        let result = parse_analysis_reply(reply, IdentityPolicy::Normalize).unwrap();
        assert_eq!(result.score, 70);
        assert_eq!(result.experience, "5");
        assert_eq!(result.skills, vec!["Go"]);
        assert_eq!(result.name, UNKNOWN_IDENTITY);
    }

    #[test]
    fn test_real_identity_survives_normalization() {
        let reply = r#"{"score": 91, "name": "Grace Hopper", "email": "grace@navy.mil"}"#;
        let result = parse_analysis_reply(reply, IdentityPolicy::Normalize).unwrap();
        assert_eq!(result.name, "Grace Hopper");
        assert_eq!(result.email, "grace@navy.mil");
    }
}
