mod config;
mod rules;

pub use config::{ScoringConfig, DEFAULT_PRIORITY_LIMIT};
pub use rules::{
    band_for_score, domain_average, overall_band, rank_domains_by_risk, risk_priority,
    weighted_index, IncompleteDomains,
};

use super::answers::AnswerSheet;
use super::catalog::Catalog;
use super::domain::{DomainKey, Language, Likert};
use super::report::{DomainScore, ScoreReport, ScoreReportSummary};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Stateless evaluator that scores answer sheets against one catalog.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Catalog,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(catalog: Catalog, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    /// Scores a sheet, or reports which answers are still missing.
    ///
    /// A domain is never averaged over a partial set of answers.
    pub fn evaluate(&self, answers: &AnswerSheet) -> Evaluation {
        let missing = answers.missing(&self.catalog);
        if !missing.is_empty() {
            warn!(missing = missing.len(), "answer sheet incomplete");
            return Evaluation::Incomplete(MissingAnswers::new(&self.catalog, missing));
        }

        let mut averages = BTreeMap::new();
        let mut domains = Vec::with_capacity(self.catalog.domains().len());
        for domain in self.catalog.domains() {
            let scores: Vec<Likert> = self
                .catalog
                .questions_for_domain(domain.key)
                .iter()
                .filter_map(|question| answers.score(question.id))
                .collect();
            let average = domain_average(&scores);
            averages.insert(domain.key, average);
            domains.push(DomainScore {
                key: domain.key,
                weight: domain.weight,
                average,
                band: band_for_score(average),
                risk: risk_priority(average, domain.weight),
            });
        }

        let overall_index = match weighted_index(&self.catalog, &averages) {
            Ok(index) => index,
            Err(incomplete) => {
                warn!(%incomplete, "domain averages incomplete");
                return Evaluation::Incomplete(MissingAnswers {
                    questions: Vec::new(),
                    domains: incomplete.missing,
                });
            }
        };

        let domain_averages: Vec<f64> = domains.iter().map(|domain| domain.average).collect();
        let overall_band = overall_band(&domain_averages);
        debug!(overall_index, %overall_band, "assessment scored");

        Evaluation::Complete(ScoreReport {
            domains,
            overall_index,
            overall_band,
        })
    }

    /// Localized summary using the configured priority list length.
    pub fn summarize(&self, report: &ScoreReport, language: Language) -> ScoreReportSummary {
        report.summary(&self.catalog, language, self.config.priority_limit)
    }
}

/// Outcome of scoring an answer sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Complete(ScoreReport),
    Incomplete(MissingAnswers),
}

impl Evaluation {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        match self {
            Self::Complete(report) => Some(report),
            Self::Incomplete(_) => None,
        }
    }

    pub fn into_report(self) -> Result<ScoreReport, MissingAnswers> {
        match self {
            Self::Complete(report) => Ok(report),
            Self::Incomplete(missing) => Err(missing),
        }
    }
}

/// Unanswered questions, and the domains they leave without an average.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{} question(s) unanswered: {}", .questions.len(), .questions.join(", "))]
pub struct MissingAnswers {
    pub questions: Vec<&'static str>,
    pub domains: Vec<DomainKey>,
}

impl MissingAnswers {
    fn new(catalog: &Catalog, questions: Vec<&'static str>) -> Self {
        let domains = catalog
            .domains()
            .iter()
            .map(|domain| domain.key)
            .filter(|key| {
                questions.iter().any(|id| {
                    catalog
                        .question(id)
                        .is_some_and(|question| question.domain == *key)
                })
            })
            .collect();

        Self { questions, domains }
    }
}
