use super::super::catalog::QUESTIONNAIRE_VERSION;
use super::super::domain::{Band, DomainKey, Language};
use super::super::report::ScoreReportSummary;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Computed scores attached to a submission, serialized as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRecord {
    pub questionnaire_version: &'static str,
    pub app_version: &'static str,
    pub language: Language,
    pub generated_at: String,
    pub overall: f64,
    pub overall_band: Band,
    pub domains: Vec<DerivedDomain>,
    pub priorities: Vec<DomainKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedDomain {
    pub key: DomainKey,
    pub label: &'static str,
    pub weight: f64,
    pub average: f64,
    pub band: Band,
    pub risk: f64,
}

impl DerivedRecord {
    pub fn new(summary: &ScoreReportSummary, generated_at: DateTime<Utc>) -> Self {
        Self {
            questionnaire_version: QUESTIONNAIRE_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            language: summary.language,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            overall: summary.overall_index,
            overall_band: summary.overall_band,
            domains: summary
                .domains
                .iter()
                .map(|domain| DerivedDomain {
                    key: domain.key,
                    label: domain.label,
                    weight: domain.weight,
                    average: domain.average,
                    band: domain.band,
                    risk: domain.risk,
                })
                .collect(),
            priorities: summary.priorities.iter().map(|domain| domain.key).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
