//! Skills comparison — grouped bars of matching vs missing skill counts.

use serde::Serialize;
use serde_json::{json, Value};

use crate::analysis::models::AnalysisResult;

/// Bar heights are the cardinalities of the two lists, not their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillsChart {
    pub matching: usize,
    pub missing: usize,
}

impl SkillsChart {
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        Self {
            matching: result.matching_skills.len(),
            missing: result.missing_skills.len(),
        }
    }

    pub fn figure(&self) -> Value {
        json!({
            "data": [
                {
                    "type": "bar",
                    "name": "Matching",
                    "x": ["Skills"],
                    "y": [self.matching],
                    "marker": {"color": "green"}
                },
                {
                    "type": "bar",
                    "name": "Missing",
                    "x": ["Skills"],
                    "y": [self.missing],
                    "marker": {"color": "red"}
                }
            ],
            "layout": {
                "title": {"text": "Skills Analysis"},
                "height": 300,
                "showlegend": true,
                "barmode": "group"
            }
        })
    }
}
