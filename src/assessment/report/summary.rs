use super::super::catalog::Catalog;
use super::super::domain::{Band, DomainKey, Language};
use super::super::scoring::rank_domains_by_risk;
use super::round_to;
use super::views::{AssessmentInsights, DomainScoreView, ScoreReportSummary};
use serde::Serialize;

/// Scores for one domain at full precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainScore {
    pub key: DomainKey,
    pub weight: f64,
    pub average: f64,
    pub band: Band,
    pub risk: f64,
}

impl DomainScore {
    pub fn to_view(&self, catalog: &Catalog, language: Language) -> DomainScoreView {
        let label = catalog
            .domain(self.key)
            .map(|domain| domain.label.get(language))
            .unwrap_or_else(|| self.key.as_str());

        DomainScoreView {
            key: self.key,
            label,
            weight: self.weight,
            average: round_to(self.average, 2),
            band: self.band,
            band_label: self.band.label(language),
            risk: round_to(self.risk, 3),
        }
    }
}

/// Derived results for a complete answer sheet. Recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub domains: Vec<DomainScore>,
    pub overall_index: f64,
    pub overall_band: Band,
}

impl ScoreReport {
    pub fn domain(&self, key: DomainKey) -> Option<&DomainScore> {
        self.domains.iter().find(|domain| domain.key == key)
    }

    pub fn ranked_by_risk(&self) -> Vec<&DomainScore> {
        rank_domains_by_risk(&self.domains)
    }

    /// The `limit` highest-risk domains.
    pub fn priorities(&self, limit: usize) -> Vec<&DomainScore> {
        let mut ranked = self.ranked_by_risk();
        ranked.truncate(limit);
        ranked
    }

    pub fn summary(
        &self,
        catalog: &Catalog,
        language: Language,
        priority_limit: usize,
    ) -> ScoreReportSummary {
        let domains = self
            .domains
            .iter()
            .map(|domain| domain.to_view(catalog, language))
            .collect();

        let priorities = self
            .priorities(priority_limit)
            .into_iter()
            .map(|domain| domain.to_view(catalog, language))
            .collect();

        // first wins on ties so catalog order decides
        let strongest = self
            .domains
            .iter()
            .fold(None::<&DomainScore>, |best, domain| match best {
                Some(best) if best.average >= domain.average => Some(best),
                _ => Some(domain),
            })
            .map(|domain| domain.key);
        let weakest = self
            .domains
            .iter()
            .fold(None::<&DomainScore>, |worst, domain| match worst {
                Some(worst) if worst.average <= domain.average => Some(worst),
                _ => Some(domain),
            })
            .map(|domain| domain.key);

        ScoreReportSummary {
            language,
            overall_index: round_to(self.overall_index, 1),
            overall_band: self.overall_band,
            overall_band_label: self.overall_band.label(language),
            domains,
            priorities,
            strongest,
            weakest,
        }
    }
}

impl ScoreReportSummary {
    pub fn insights(&self) -> AssessmentInsights {
        super::generate_insights(self)
    }
}
