mod insights;
mod summary;
pub mod views;

pub use summary::{DomainScore, ScoreReport};
pub use views::{AssessmentInsights, DomainNote, DomainScoreView, ScoreReportSummary};

pub(crate) use insights::generate_insights;

/// Rounds for display; reports keep full precision.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
