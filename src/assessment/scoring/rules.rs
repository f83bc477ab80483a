use super::super::catalog::Catalog;
use super::super::domain::{Band, DomainKey, Likert};
use super::super::report::DomainScore;
use std::collections::BTreeMap;

/// Half-open `[lower, upper)` ranges, checked in order.
const BANDS: [(Band, f64, f64); 3] = [
    (Band::Red, 0.0, 2.5),
    (Band::Amber, 2.5, 3.5),
    (Band::Green, 3.5, 5.01),
];

/// Returned by [`weighted_index`] when a catalog domain has no average.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no average for domain(s): {}", join_keys(.missing))]
pub struct IncompleteDomains {
    pub missing: Vec<DomainKey>,
}

fn join_keys(keys: &[DomainKey]) -> String {
    keys.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Classifies an average score. Falls back to amber for values outside
/// every band, including NaN.
pub fn band_for_score(score: f64) -> Band {
    BANDS
        .iter()
        .find(|(_, lower, upper)| score >= *lower && score < *upper)
        .map(|(band, _, _)| *band)
        .unwrap_or(Band::Amber)
}

/// Arithmetic mean of a fully answered domain.
pub fn domain_average(scores: &[Likert]) -> f64 {
    let total: u32 = scores.iter().map(|score| u32::from(score.value())).sum();
    total as f64 / scores.len() as f64
}

/// Weighted mean of the domain averages rescaled from 1-5 to 0-100.
pub fn weighted_index(
    catalog: &Catalog,
    averages: &BTreeMap<DomainKey, f64>,
) -> Result<f64, IncompleteDomains> {
    let missing: Vec<DomainKey> = catalog
        .domains()
        .iter()
        .map(|domain| domain.key)
        .filter(|key| !averages.contains_key(key))
        .collect();
    if !missing.is_empty() {
        return Err(IncompleteDomains { missing });
    }

    let weighted_sum: f64 = catalog
        .domains()
        .iter()
        .map(|domain| averages[&domain.key] * domain.weight)
        .sum();

    Ok((weighted_sum - 1.0) / 4.0 * 100.0)
}

/// Discussion priority: low scores in heavily weighted domains rank first.
pub fn risk_priority(score: f64, weight: f64) -> f64 {
    (6.0 - score) * weight
}

/// Stable descending sort by risk; equal risks keep catalog order.
pub fn rank_domains_by_risk(domains: &[DomainScore]) -> Vec<&DomainScore> {
    let mut ranked: Vec<&DomainScore> = domains.iter().collect();
    ranked.sort_by(|a, b| b.risk.total_cmp(&a.risk));
    ranked
}

/// Band of the unweighted mean of the domain averages.
///
/// This deliberately ignores domain weights, unlike [`weighted_index`].
pub fn overall_band(averages: &[f64]) -> Band {
    let mean = averages.iter().sum::<f64>() / averages.len() as f64;
    band_for_score(mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::standard().expect("standard catalog")
    }

    fn averages(values: [f64; 6]) -> BTreeMap<DomainKey, f64> {
        DomainKey::ordered().into_iter().zip(values).collect()
    }

    fn domain_score(key: DomainKey, average: f64, weight: f64) -> DomainScore {
        DomainScore {
            key,
            weight,
            average,
            band: band_for_score(average),
            risk: risk_priority(average, weight),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn band_boundaries_belong_to_the_upper_band() {
        assert_eq!(band_for_score(1.0), Band::Red);
        assert_eq!(band_for_score(2.49), Band::Red);
        assert_eq!(band_for_score(2.5), Band::Amber);
        assert_eq!(band_for_score(3.49), Band::Amber);
        assert_eq!(band_for_score(3.5), Band::Green);
        assert_eq!(band_for_score(5.0), Band::Green);
    }

    #[test]
    fn band_defaults_to_amber_outside_the_scale() {
        assert_eq!(band_for_score(f64::NAN), Band::Amber);
        assert_eq!(band_for_score(-1.0), Band::Amber);
        assert_eq!(band_for_score(6.0), Band::Amber);
    }

    #[test]
    fn domain_average_is_the_arithmetic_mean() {
        let scores: Vec<Likert> = [2, 3, 2, 3]
            .into_iter()
            .map(|v| Likert::new(v).expect("valid"))
            .collect();
        assert_eq!(domain_average(&scores), 2.5);
    }

    #[test]
    fn weighted_index_spans_zero_to_one_hundred() {
        let catalog = catalog();
        let low = weighted_index(&catalog, &averages([1.0; 6])).expect("complete");
        let high = weighted_index(&catalog, &averages([5.0; 6])).expect("complete");
        assert_close(low, 0.0);
        assert_close(high, 100.0);
    }

    #[test]
    fn weighted_index_matches_worked_example() {
        let catalog = catalog();
        let index = weighted_index(&catalog, &averages([2.0, 3.0, 4.0, 5.0, 2.5, 3.5]))
            .expect("complete");
        assert_close(index, 58.125);
    }

    #[test]
    fn weighted_index_reports_missing_domains() {
        let catalog = catalog();
        let mut partial = averages([3.0; 6]);
        partial.remove(&DomainKey::Ownership);
        partial.remove(&DomainKey::Wealth);

        let error = weighted_index(&catalog, &partial).expect_err("two domains missing");
        assert_eq!(
            error.missing,
            vec![DomainKey::Ownership, DomainKey::Wealth]
        );
        assert_eq!(
            error.to_string(),
            "no average for domain(s): ownership, wealth"
        );
    }

    #[test]
    fn risk_priority_scales_inverse_score_by_weight() {
        assert_close(risk_priority(1.0, 0.20), 1.0);
        assert_close(risk_priority(5.0, 0.20), 0.2);
        assert_close(risk_priority(3.0, 0.10), 0.3);
    }

    #[test]
    fn ranking_is_descending_and_stable_for_ties() {
        let domains = vec![
            domain_score(DomainKey::Governance, 3.0, 0.20),
            domain_score(DomainKey::Family, 3.0, 0.20),
            domain_score(DomainKey::Ownership, 1.0, 0.15),
            domain_score(DomainKey::Succession, 3.0, 0.20),
            domain_score(DomainKey::Leadership, 5.0, 0.15),
            domain_score(DomainKey::Wealth, 2.0, 0.10),
        ];

        let order: Vec<DomainKey> = rank_domains_by_risk(&domains)
            .into_iter()
            .map(|d| d.key)
            .collect();
        assert_eq!(
            order,
            vec![
                DomainKey::Ownership,
                DomainKey::Governance,
                DomainKey::Family,
                DomainKey::Succession,
                DomainKey::Wealth,
                DomainKey::Leadership,
            ]
        );
    }

    #[test]
    fn overall_band_ignores_weights() {
        assert_eq!(overall_band(&[2.0, 3.0, 4.0, 5.0, 2.5, 3.5]), Band::Amber);
        assert_eq!(overall_band(&[1.0, 5.0, 5.0, 5.0, 5.0, 5.0]), Band::Green);
        // weighted mean 3.2 (amber), unweighted mean 3.5 (green)
        assert_eq!(overall_band(&[2.0, 2.0, 5.0, 2.0, 5.0, 5.0]), Band::Green);
    }

    proptest! {
        #[test]
        fn weighted_index_is_monotonic_in_each_domain(
            values in prop::array::uniform6(1.0f64..=5.0),
            slot in 0usize..6,
            bump in 0.0f64..=4.0,
        ) {
            let catalog = catalog();
            let before = weighted_index(&catalog, &averages(values)).expect("complete");

            let mut raised = values;
            raised[slot] = (raised[slot] + bump).min(5.0);
            let after = weighted_index(&catalog, &averages(raised)).expect("complete");

            prop_assert!(after >= before, "{after} < {before}");
        }

        #[test]
        fn bands_partition_the_answer_scale(score in 1.0f64..=5.0) {
            let expected = if score < 2.5 {
                Band::Red
            } else if score < 3.5 {
                Band::Amber
            } else {
                Band::Green
            };
            prop_assert_eq!(band_for_score(score), expected);
        }
    }
}
