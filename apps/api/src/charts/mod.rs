// Presentation layer: pure mappings from an AnalysisResult to display descriptions.
// Figures are emitted as Plotly JSON so the page can draw them unchanged.

pub mod gauge;
pub mod skills;
pub mod verdict;

pub use gauge::ScoreGauge;
pub use skills::SkillsChart;
pub use verdict::MatchVerdict;
