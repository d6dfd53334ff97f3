//! Analysis data models — the raw model reply and the normalized result.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Placeholder shown when the model could not extract a name or email.
pub const UNKNOWN_IDENTITY: &str = "Unknown";

// ────────────────────────────────────────────────────────────────────────────
// Identity normalization policy
// ────────────────────────────────────────────────────────────────────────────

/// How `name` and `email` from the model reply are post-processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityPolicy {
    /// Absent, empty, or "N/A" values become [`UNKNOWN_IDENTITY`].
    #[default]
    Normalize,
    /// Values pass through as returned; absent or null become "".
    Preserve,
}

#[derive(Debug, Error)]
#[error("unknown identity policy '{0}'")]
pub struct UnknownIdentityPolicy(String);

impl FromStr for IdentityPolicy {
    type Err = UnknownIdentityPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normalize" => Ok(IdentityPolicy::Normalize),
            "preserve" => Ok(IdentityPolicy::Preserve),
            other => Err(UnknownIdentityPolicy(other.to_string())),
        }
    }
}

impl IdentityPolicy {
    pub fn apply(self, value: Option<String>) -> String {
        let value = value.unwrap_or_default();
        match self {
            IdentityPolicy::Preserve => value,
            IdentityPolicy::Normalize => {
                if value.is_empty() || value.trim().eq_ignore_ascii_case("N/A") {
                    UNKNOWN_IDENTITY.to_string()
                } else {
                    value
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Model reply (as returned) and AnalysisResult (as displayed)
// ────────────────────────────────────────────────────────────────────────────

/// The JSON object the model is asked to return. Only `score` is required
/// and type-checked; every other field is accepted in whatever JSON shape the
/// model chose and rendered as text. Missing fields read as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelReply {
    #[serde(deserialize_with = "deserialize_score")]
    pub score: i64,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub matching_skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub missing_skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub summary: Option<String>,
}

/// Structured fit analysis of one resume against one job description.
///
/// `score` is expected in 0–100 but is never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: i64,
    pub name: String,
    pub email: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub summary: String,
}

impl ModelReply {
    pub fn into_result(self, policy: IdentityPolicy) -> AnalysisResult {
        AnalysisResult {
            score: self.score,
            name: policy.apply(self.name),
            email: policy.apply(self.email),
            experience: self.experience.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            matching_skills: self.matching_skills.unwrap_or_default(),
            missing_skills: self.missing_skills.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
        }
    }
}

impl AnalysisResult {
    /// The first `n` skills, in model order.
    pub fn top_skills(&self, n: usize) -> &[String] {
        &self.skills[..self.skills.len().min(n)]
    }
}

/// Accepts integer scores as-is and rounds fractional ones.
fn deserialize_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Int(i64),
        Float(f64),
    }

    Ok(match RawScore::deserialize(deserializer)? {
        RawScore::Int(n) => n,
        RawScore::Float(f) => f.round() as i64,
    })
}

/// Display text for an arbitrary JSON value; strings lose their quotes.
/// `null` has no text.
fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Any JSON value; non-strings are kept as their JSON text.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

/// Any JSON array, with items rendered as text and `null` items dropped.
/// A lone scalar counts as a one-item list.
fn deserialize_skills<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Array(items) => Some(items.into_iter().filter_map(value_text).collect()),
        scalar => value_text(scalar).map(|s| vec![s]),
    })
}
