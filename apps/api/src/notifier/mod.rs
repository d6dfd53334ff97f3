//! Webhook Notifier — best-effort, at-most-once POST of an analysis summary
//! to the automation workflow.
//!
//! Never returns an error: every failure mode is a `DeliveryOutcome` the
//! caller reports as a warning while still showing the analysis.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::models::AnalysisResult;

/// Upper bound on a single delivery attempt.
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);
/// How many skills go into the record's comma-joined `skills` field.
const RECORD_SKILL_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Payload
// ────────────────────────────────────────────────────────────────────────────

/// Flat record forwarded to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookRecord {
    pub name: String,
    pub email: String,
    pub score: i64,
    pub experience: String,
    /// First five skills joined with ", ".
    pub skills: String,
    pub summary: String,
}

impl WebhookRecord {
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        Self {
            name: result.name.clone(),
            email: result.email.clone(),
            score: result.score,
            experience: result.experience.clone(),
            skills: result.top_skills(RECORD_SKILL_LIMIT).join(", "),
            summary: result.summary.clone(),
        }
    }

    /// Fixed record used to check that the workflow is reachable.
    pub fn sample() -> Self {
        Self {
            name: "Test Candidate".to_string(),
            email: "test@example.com".to_string(),
            score: 85,
            experience: "5 years".to_string(),
            skills: "Python, AI, ML".to_string(),
            summary: "This is a test candidate".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Outcome
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered { status: u16 },
    NotConfigured,
    Rejected { status: u16 },
    Failed { reason: String },
}

/// What the page shows about the webhook after an analysis.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookStatus {
    pub delivered: bool,
    pub message: String,
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    pub fn message(&self) -> String {
        match self {
            DeliveryOutcome::Delivered { status } => {
                format!("Data sent to automation workflow! (status {status})")
            }
            DeliveryOutcome::NotConfigured => {
                "n8n webhook not configured; add N8N_WEBHOOK_URL to enable it".to_string()
            }
            DeliveryOutcome::Rejected { status } => {
                format!("n8n webhook did not return 2xx (status {status})")
            }
            DeliveryOutcome::Failed { reason } => format!("n8n webhook unreachable: {reason}"),
        }
    }

    pub fn status(&self) -> WebhookStatus {
        WebhookStatus {
            delivered: self.is_success(),
            message: self.message(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Notifier
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: Option<String>,
}

impl WebhookNotifier {
    pub fn new(url: Option<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(url, WEBHOOK_TIMEOUT)
    }

    pub fn with_timeout(url: Option<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Makes exactly one POST attempt. Success iff the status is 2xx.
    pub async fn send<T: Serialize + ?Sized>(&self, record: &T) -> DeliveryOutcome {
        let Some(url) = self.url.as_deref() else {
            return DeliveryOutcome::NotConfigured;
        };

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(record)
            .send()
            .await;

        let outcome = match response {
            Ok(r) if r.status().is_success() => DeliveryOutcome::Delivered {
                status: r.status().as_u16(),
            },
            Ok(r) => DeliveryOutcome::Rejected {
                status: r.status().as_u16(),
            },
            Err(e) => DeliveryOutcome::Failed {
                reason: if e.is_timeout() {
                    "timed out".to_string()
                } else {
                    e.to_string()
                },
            },
        };

        if outcome.is_success() {
            info!("Webhook delivered: {outcome:?}");
        } else {
            warn!("Webhook delivery failed: {outcome:?}");
        }
        outcome
    }
}
