use super::super::domain::{Band, DomainKey, Language};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainScoreView {
    pub key: DomainKey,
    pub label: &'static str,
    pub weight: f64,
    /// Two decimals.
    pub average: f64,
    pub band: Band,
    pub band_label: &'static str,
    /// Three decimals.
    pub risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReportSummary {
    pub language: Language,
    /// One decimal, 0-100.
    pub overall_index: f64,
    pub overall_band: Band,
    pub overall_band_label: &'static str,
    pub domains: Vec<DomainScoreView>,
    pub priorities: Vec<DomainScoreView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strongest: Option<DomainKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weakest: Option<DomainKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainNote {
    pub key: DomainKey,
    pub band: Band,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentInsights {
    pub headline: String,
    pub domain_notes: Vec<DomainNote>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
}
