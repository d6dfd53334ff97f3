use serde::Serialize;

use crate::charts::gauge::{EXCELLENT_THRESHOLD, GOOD_THRESHOLD};

/// Qualitative band for a score, using the same cut points as the gauge colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchVerdict {
    Excellent,
    Good,
    Poor,
}

/// Serialized form: `{"level": "good", "label": "Good Match"}`.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictView {
    pub level: MatchVerdict,
    pub label: &'static str,
}

impl MatchVerdict {
    pub fn for_score(score: i64) -> Self {
        match score {
            s if s >= EXCELLENT_THRESHOLD => MatchVerdict::Excellent,
            s if s >= GOOD_THRESHOLD => MatchVerdict::Good,
            _ => MatchVerdict::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchVerdict::Excellent => "Excellent Match",
            MatchVerdict::Good => "Good Match",
            MatchVerdict::Poor => "Poor Match",
        }
    }

    pub fn view(self) -> VerdictView {
        VerdictView {
            level: self,
            label: self.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_boundaries_match_gauge() {
        assert_eq!(MatchVerdict::for_score(49), MatchVerdict::Poor);
        assert_eq!(MatchVerdict::for_score(50), MatchVerdict::Good);
        assert_eq!(MatchVerdict::for_score(74), MatchVerdict::Good);
        assert_eq!(MatchVerdict::for_score(75), MatchVerdict::Excellent);
    }

    #[test]
    fn test_view_serializes_level_and_label() {
        let json = serde_json::to_value(MatchVerdict::for_score(80).view()).unwrap();
        assert_eq!(json["level"], "excellent");
        assert_eq!(json["label"], "Excellent Match");
    }
}
