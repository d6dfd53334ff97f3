//! Score gauge — colour-banded indicator for the match score.

use serde::Serialize;
use serde_json::{json, Value};

/// Scores at or above this are drawn green; the threshold marker sits here too.
pub const EXCELLENT_THRESHOLD: i64 = 75;
/// Scores at or above this (and below [`EXCELLENT_THRESHOLD`]) are drawn orange.
pub const GOOD_THRESHOLD: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeColor {
    Red,
    Orange,
    Green,
}

impl GaugeColor {
    pub fn for_score(score: i64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            GaugeColor::Green
        } else if score >= GOOD_THRESHOLD {
            GaugeColor::Orange
        } else {
            GaugeColor::Red
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GaugeColor::Red => "red",
            GaugeColor::Orange => "orange",
            GaugeColor::Green => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreGauge {
    pub value: i64,
    pub color: GaugeColor,
    /// Always [`EXCELLENT_THRESHOLD`], independent of `value`.
    pub threshold: i64,
}

impl ScoreGauge {
    pub fn for_score(score: i64) -> Self {
        Self {
            value: score,
            color: GaugeColor::for_score(score),
            threshold: EXCELLENT_THRESHOLD,
        }
    }

    /// Plotly `indicator` figure: gauge+number on a 0–100 axis.
    pub fn figure(&self) -> Value {
        json!({
            "data": [{
                "type": "indicator",
                "mode": "gauge+number",
                "value": self.value,
                "domain": {"x": [0, 1], "y": [0, 1]},
                "title": {"text": "Match Score", "font": {"size": 20}},
                "gauge": {
                    "axis": {"range": [0, 100]},
                    "bar": {"color": self.color.as_str()},
                    "steps": [
                        {"range": [0, GOOD_THRESHOLD], "color": "lightgray"},
                        {"range": [GOOD_THRESHOLD, EXCELLENT_THRESHOLD], "color": "lightyellow"},
                        {"range": [EXCELLENT_THRESHOLD, 100], "color": "lightgreen"}
                    ],
                    "threshold": {
                        "line": {"color": "red", "width": 4},
                        "thickness": 0.75,
                        "value": self.threshold
                    }
                }
            }],
            "layout": {
                "height": 250,
                "margin": {"l": 10, "r": 10, "t": 50, "b": 10}
            }
        })
    }
}
