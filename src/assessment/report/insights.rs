use super::super::domain::{Band, DomainKey, LocalizedText};
use super::super::scoring::band_for_score;
use super::views::{AssessmentInsights, DomainNote, DomainScoreView, ScoreReportSummary};

pub(crate) fn generate_insights(summary: &ScoreReportSummary) -> AssessmentInsights {
    let language = summary.language;

    let headline = headline(summary.overall_band).get(language).to_string();

    let domain_notes = summary
        .domains
        .iter()
        .map(|domain| DomainNote {
            key: domain.key,
            band: domain.band,
            note: format!(
                "{}: {} ({} {:.2})",
                domain.label,
                band_note(domain.band).get(language),
                AVERAGE.get(language),
                domain.average
            ),
        })
        .collect();

    let red: Vec<&DomainScoreView> = summary
        .priorities
        .iter()
        .filter(|domain| domain.band == Band::Red)
        .collect();
    let focus: Vec<&DomainScoreView> = if red.is_empty() {
        summary
            .priorities
            .iter()
            .filter(|domain| domain.band == Band::Amber)
            .collect()
    } else {
        red
    };

    let mut recommended_actions: Vec<String> = focus
        .iter()
        .map(|domain| {
            format!(
                "{}: {}",
                domain.label,
                recommended_action(domain.key).get(language)
            )
        })
        .collect();
    if recommended_actions.is_empty() {
        recommended_actions.push(MAINTAIN.get(language).to_string());
    }

    let mut observations = vec![format!(
        "{} {:.1}/100",
        INDEX.get(language),
        summary.overall_index
    )];

    if let Some(top) = summary.priorities.first() {
        observations.push(format!(
            "{}: {} ({} {:.3})",
            TOP_PRIORITY.get(language),
            top.label,
            RISK.get(language),
            top.risk
        ));
    }

    // the index is weighted, the overall band is not
    let index_band = band_for_score(1.0 + summary.overall_index / 25.0);
    if index_band != summary.overall_band {
        observations.push(format!(
            "{} ({})",
            BAND_DIVERGENCE.get(language),
            index_band.label(language)
        ));
    }

    AssessmentInsights {
        headline,
        domain_notes,
        recommended_actions,
        observations,
    }
}

const AVERAGE: LocalizedText = LocalizedText::new("μέσος όρος", "average");
const RISK: LocalizedText = LocalizedText::new("κίνδυνος", "risk");
const INDEX: LocalizedText = LocalizedText::new("Δείκτης ωριμότητας", "Maturity index");
const TOP_PRIORITY: LocalizedText = LocalizedText::new(
    "Υψηλότερη προτεραιότητα συζήτησης",
    "Highest discussion priority",
);
const BAND_DIVERGENCE: LocalizedText = LocalizedText::new(
    "Η συνολική ζώνη βασίζεται στον μη σταθμισμένο μέσο όρο των τομέων και διαφέρει από τη ζώνη του σταθμισμένου δείκτη",
    "The overall band uses the unweighted domain mean and differs from the band of the weighted index",
);
const MAINTAIN: LocalizedText = LocalizedText::new(
    "Διατηρήστε τις υφιστάμενες δομές και επανεξετάστε τις ετησίως",
    "Maintain the current structures and review them annually",
);

const fn headline(band: Band) -> LocalizedText {
    match band {
        Band::Red => LocalizedText::new(
            "Η συνολική ωριμότητα είναι χαμηλή: η συνέχεια της επιχείρησης εκτίθεται σε σημαντικό κίνδυνο διακυβέρνησης.",
            "Overall maturity is low: business continuity is exposed to significant governance risk.",
        ),
        Band::Amber => LocalizedText::new(
            "Η συνολική ωριμότητα βρίσκεται σε εξέλιξη: βασικές δομές υπάρχουν αλλά χρειάζονται θεσμοθέτηση.",
            "Overall maturity is developing: key structures exist but need formalising.",
        ),
        Band::Green => LocalizedText::new(
            "Η συνολική ωριμότητα είναι υψηλή: τα θεμέλια διακυβέρνησης υπάρχουν και χρειάζονται βελτιστοποίηση.",
            "Overall maturity is strong: governance foundations are in place and can be refined.",
        ),
    }
}

const fn band_note(band: Band) -> LocalizedText {
    match band {
        Band::Red => LocalizedText::new(
            "κρίσιμο κενό, απαιτεί άμεση προτεραιότητα",
            "critical gap, address as a priority",
        ),
        Band::Amber => LocalizedText::new(
            "μερικώς υλοποιημένο, χρειάζεται θεσμοθέτηση και τεκμηρίωση",
            "partially in place, formalise and document",
        ),
        Band::Green => LocalizedText::new(
            "καλά εδραιωμένο, διατήρηση και περιοδική επανεξέταση",
            "well established, maintain and review periodically",
        ),
    }
}

const fn recommended_action(key: DomainKey) -> LocalizedText {
    match key {
        DomainKey::Governance => LocalizedText::new(
            "Θεσμοθετήστε τις αρμοδιότητες του ΔΣ και εντάξτε ανεξάρτητους συμβούλους",
            "Formalise board responsibilities and bring in independent advisors",
        ),
        DomainKey::Family => LocalizedText::new(
            "Συντάξτε οικογενειακό καταστατικό και καθιερώστε τακτικό οικογενειακό συμβούλιο",
            "Draft a family charter and hold a regular family council",
        ),
        DomainKey::Ownership => LocalizedText::new(
            "Υπογράψτε συμφωνία μετόχων και εναρμονίστε τον κληρονομικό σχεδιασμό",
            "Put a shareholders' agreement in place and align estate plans",
        ),
        DomainKey::Succession => LocalizedText::new(
            "Καταγράψτε σχέδιο διαδοχής με συγκεκριμένους υποψηφίους και χρονοδιάγραμμα μετάβασης",
            "Document a succession plan with named candidates and a transition timeline",
        ),
        DomainKey::Leadership => LocalizedText::new(
            "Ξεκινήστε πρόγραμμα ανάπτυξης της επόμενης γενιάς και διακράτησης βασικών στελεχών",
            "Start a next-generation development and key-manager retention programme",
        ),
        DomainKey::Wealth => LocalizedText::new(
            "Διαχωρίστε τα οικονομικά επιχείρησης και οικογένειας και καθιερώστε περιοδική αξιολόγηση κινδύνων",
            "Separate business and family finances and schedule a periodic risk review",
        ),
    }
}

#[cfg(test)]
mod tests {
    use crate::assessment::catalog::Catalog;
    use crate::assessment::domain::{Band, DomainKey, Language};
    use crate::assessment::report::{DomainScore, ScoreReport};
    use crate::assessment::scoring::{band_for_score, risk_priority};

    fn report(averages: [f64; 6], overall_index: f64, overall_band: Band) -> ScoreReport {
        let catalog = Catalog::standard().expect("standard catalog");
        ScoreReport {
            domains: catalog
                .domains()
                .iter()
                .zip(averages)
                .map(|(domain, average)| DomainScore {
                    key: domain.key,
                    weight: domain.weight,
                    average,
                    band: band_for_score(average),
                    risk: risk_priority(average, domain.weight),
                })
                .collect(),
            overall_index,
            overall_band,
        }
    }

    #[test]
    fn red_domains_drive_recommendations_in_priority_order() {
        let catalog = Catalog::standard().expect("standard catalog");
        let report = report([2.0, 3.0, 4.0, 1.5, 2.5, 3.5], 54.0, Band::Amber);
        let insights = report.summary(&catalog, Language::En, 5).insights();

        assert!(insights.headline.starts_with("Overall maturity is developing"));
        assert_eq!(insights.recommended_actions.len(), 2);
        assert!(insights.recommended_actions[0].starts_with("Succession Planning:"));
        assert!(insights.recommended_actions[1].starts_with("Corporate Governance:"));
        assert_eq!(insights.domain_notes.len(), 6);
        assert_eq!(
            insights.domain_notes[3].note,
            "Succession Planning: critical gap, address as a priority (average 1.50)"
        );
    }

    #[test]
    fn amber_priorities_are_used_when_nothing_is_red() {
        let catalog = Catalog::standard().expect("standard catalog");
        let report = report([3.0, 4.0, 4.0, 4.0, 4.0, 4.0], 71.25, Band::Green);
        let insights = report.summary(&catalog, Language::En, 5).insights();

        assert_eq!(
            insights.recommended_actions,
            vec!["Corporate Governance: Formalise board responsibilities and bring in independent advisors"]
        );
        assert_eq!(insights.observations[0], "Maturity index 71.3/100");
    }

    #[test]
    fn all_green_sheet_gets_maintenance_advice_in_greek() {
        let catalog = Catalog::standard().expect("standard catalog");
        let report = report([5.0; 6], 100.0, Band::Green);
        let insights = report.summary(&catalog, Language::Gr, 5).insights();

        assert_eq!(insights.recommended_actions.len(), 1);
        assert!(insights.recommended_actions[0].starts_with("Διατηρήστε"));
        assert!(insights.observations[0].starts_with("Δείκτης ωριμότητας"));
    }

    #[test]
    fn flags_when_weighted_index_and_overall_band_disagree() {
        let catalog = Catalog::standard().expect("standard catalog");
        // weighted mean 3.2 -> index 55.0 (amber); unweighted mean 3.5 (green)
        let report = report([2.0, 2.0, 5.0, 2.0, 5.0, 5.0], 55.0, Band::Green);
        let insights = report.summary(&catalog, Language::En, 5).insights();

        assert!(insights
            .observations
            .iter()
            .any(|note| note.contains("unweighted domain mean") && note.ends_with("(Amber)")));
        assert!(insights
            .domain_notes
            .iter()
            .all(|note| note.key != DomainKey::Wealth || note.band == Band::Green));
    }
}
