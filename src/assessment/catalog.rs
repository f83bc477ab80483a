use super::domain::{Domain, DomainKey, LocalizedText, Question};
use std::collections::HashSet;

/// Version tag attached to every derived record produced from this catalog.
pub const QUESTIONNAIRE_VERSION: &str = "v1";

const WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog defines no domains")]
    NoDomains,
    #[error("domain {0} is defined more than once")]
    DuplicateDomain(DomainKey),
    #[error("domain {domain} has invalid weight {weight}")]
    InvalidWeight { domain: DomainKey, weight: f64 },
    #[error("domain weights sum to {total:.6}, expected 1.0")]
    WeightSum { total: f64 },
    #[error("question {0} is defined more than once")]
    DuplicateQuestion(&'static str),
    #[error("question {question} references undefined domain {domain}")]
    UnknownDomain {
        question: &'static str,
        domain: DomainKey,
    },
    #[error("domain {0} has no questions")]
    EmptyDomain(DomainKey),
}

/// Immutable questionnaire definition: weighted domains and their questions.
#[derive(Debug, Clone)]
pub struct Catalog {
    domains: Vec<Domain>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Builds a catalog after checking its integrity rules.
    pub fn new(domains: Vec<Domain>, questions: Vec<Question>) -> Result<Self, CatalogError> {
        if domains.is_empty() {
            return Err(CatalogError::NoDomains);
        }

        let mut seen_domains = HashSet::new();
        for domain in &domains {
            if !seen_domains.insert(domain.key) {
                return Err(CatalogError::DuplicateDomain(domain.key));
            }
            if !domain.weight.is_finite() || domain.weight < 0.0 {
                return Err(CatalogError::InvalidWeight {
                    domain: domain.key,
                    weight: domain.weight,
                });
            }
        }

        let total: f64 = domains.iter().map(|domain| domain.weight).sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(CatalogError::WeightSum { total });
        }

        let mut seen_questions = HashSet::new();
        for question in &questions {
            if !seen_questions.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id));
            }
            if !seen_domains.contains(&question.domain) {
                return Err(CatalogError::UnknownDomain {
                    question: question.id,
                    domain: question.domain,
                });
            }
        }

        if let Some(empty) = domains
            .iter()
            .find(|domain| !questions.iter().any(|q| q.domain == domain.key))
        {
            return Err(CatalogError::EmptyDomain(empty.key));
        }

        Ok(Self { domains, questions })
    }

    /// The Legacy360 v1 questionnaire: six domains, four questions each.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(standard_domains(), standard_questions())
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn domain(&self, key: DomainKey) -> Option<&Domain> {
        self.domains.iter().find(|domain| domain.key == key)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions_for_domain(&self, key: DomainKey) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.domain == key)
            .collect()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.questions.iter().map(|question| question.id)
    }
}

fn standard_domains() -> Vec<Domain> {
    vec![
        Domain {
            key: DomainKey::Governance,
            weight: 0.20,
            label: LocalizedText::new("Εταιρική Διακυβέρνηση", "Corporate Governance"),
        },
        Domain {
            key: DomainKey::Family,
            weight: 0.20,
            label: LocalizedText::new("Οικογενειακή Διακυβέρνηση", "Family Governance"),
        },
        Domain {
            key: DomainKey::Ownership,
            weight: 0.15,
            label: LocalizedText::new("Ιδιοκτησιακή & Νομική Δομή", "Ownership & Legal Structure"),
        },
        Domain {
            key: DomainKey::Succession,
            weight: 0.20,
            label: LocalizedText::new("Σχεδιασμός Διαδοχής", "Succession Planning"),
        },
        Domain {
            key: DomainKey::Leadership,
            weight: 0.15,
            label: LocalizedText::new("Ηγεσία & Επόμενη Γενιά", "Leadership & Next Generation"),
        },
        Domain {
            key: DomainKey::Wealth,
            weight: 0.10,
            label: LocalizedText::new("Διαχείριση Πλούτου & Κινδύνων", "Wealth & Risk Management"),
        },
    ]
}

fn standard_questions() -> Vec<Question> {
    vec![
        // Corporate governance
        Question {
            id: "gov_1",
            domain: DomainKey::Governance,
            text: LocalizedText::new(
                "Η εταιρεία διαθέτει ενεργό διοικητικό συμβούλιο με σαφώς καθορισμένες αρμοδιότητες.",
                "The company has an active board with clearly defined responsibilities.",
            ),
        },
        Question {
            id: "gov_2",
            domain: DomainKey::Governance,
            text: LocalizedText::new(
                "Ανεξάρτητα ή εξωτερικά μέλη συμβάλλουν στις στρατηγικές αποφάσεις.",
                "Independent or external members contribute to strategic decisions.",
            ),
        },
        Question {
            id: "gov_3",
            domain: DomainKey::Governance,
            text: LocalizedText::new(
                "Οι αρμοδιότητες λήψης αποφάσεων μεταξύ μετόχων, ΔΣ και διοίκησης είναι καταγεγραμμένες.",
                "Decision rights between owners, board and management are documented.",
            ),
        },
        Question {
            id: "gov_4",
            domain: DomainKey::Governance,
            text: LocalizedText::new(
                "Η οικονομική πληροφόρηση και η αξιολόγηση της απόδοσης ακολουθούν τακτικό, επίσημο κύκλο.",
                "Financial reporting and performance reviews follow a regular, formal cycle.",
            ),
        },
        // Family governance
        Question {
            id: "fam_1",
            domain: DomainKey::Family,
            text: LocalizedText::new(
                "Η οικογένεια διαθέτει γραπτό καταστατικό ή πρωτόκολλο με κοινές αξίες και κανόνες.",
                "The family has a written charter or protocol setting out shared values and rules.",
            ),
        },
        Question {
            id: "fam_2",
            domain: DomainKey::Family,
            text: LocalizedText::new(
                "Οικογενειακό συμβούλιο ή συνέλευση συνεδριάζει τακτικά.",
                "A family council or assembly meets regularly.",
            ),
        },
        Question {
            id: "fam_3",
            domain: DomainKey::Family,
            text: LocalizedText::new(
                "Υπάρχουν σαφείς κανόνες για την απασχόληση μελών της οικογένειας στην επιχείρηση.",
                "Clear rules govern the employment of family members in the business.",
            ),
        },
        Question {
            id: "fam_4",
            domain: DomainKey::Family,
            text: LocalizedText::new(
                "Υπάρχει συμφωνημένη διαδικασία επίλυσης οικογενειακών διαφορών.",
                "There is an agreed process for resolving family conflicts.",
            ),
        },
        // Ownership & legal structure
        Question {
            id: "own_1",
            domain: DomainKey::Ownership,
            text: LocalizedText::new(
                "Συμφωνία μετόχων ρυθμίζει τις μεταβιβάσεις μετοχών και τις εξόδους.",
                "A shareholders' agreement regulates share transfers and exits.",
            ),
        },
        Question {
            id: "own_2",
            domain: DomainKey::Ownership,
            text: LocalizedText::new(
                "Η νομική δομή και η δομή συμμετοχών είναι καταγεγραμμένες και επανεξετάζονται.",
                "The legal and holding structure is documented and reviewed.",
            ),
        },
        Question {
            id: "own_3",
            domain: DomainKey::Ownership,
            text: LocalizedText::new(
                "Η μερισματική πολιτική είναι καθορισμένη και γνωστή σε όλους τους μετόχους.",
                "The dividend policy is defined and communicated to all owners.",
            ),
        },
        Question {
            id: "own_4",
            domain: DomainKey::Ownership,
            text: LocalizedText::new(
                "Οι διαθήκες και ο κληρονομικός σχεδιασμός των μετόχων είναι εναρμονισμένοι με τα σχέδια της επιχείρησης.",
                "The owners' wills and estate plans are aligned with the business plans.",
            ),
        },
        // Succession planning
        Question {
            id: "suc_1",
            domain: DomainKey::Succession,
            text: LocalizedText::new(
                "Υπάρχει γραπτό σχέδιο διαδοχής για τις βασικές θέσεις ηγεσίας.",
                "A written succession plan exists for key leadership roles.",
            ),
        },
        Question {
            id: "suc_2",
            domain: DomainKey::Succession,
            text: LocalizedText::new(
                "Έχουν εντοπιστεί και αξιολογηθεί πιθανοί διάδοχοι.",
                "Potential successors have been identified and assessed.",
            ),
        },
        Question {
            id: "suc_3",
            domain: DomainKey::Succession,
            text: LocalizedText::new(
                "Έχει συμφωνηθεί χρονοδιάγραμμα για τη μετάβαση της ηγεσίας.",
                "A timeline for the leadership transition has been agreed.",
            ),
        },
        Question {
            id: "suc_4",
            domain: DomainKey::Succession,
            text: LocalizedText::new(
                "Υπάρχει σχέδιο έκτακτης ανάγκης για την αιφνίδια απουσία του επικεφαλής.",
                "There is a contingency plan for the sudden absence of the leader.",
            ),
        },
        // Leadership & next generation
        Question {
            id: "lea_1",
            domain: DomainKey::Leadership,
            text: LocalizedText::new(
                "Η επόμενη γενιά λαμβάνει δομημένη ανάπτυξη και καθοδήγηση.",
                "The next generation receives structured development and mentoring.",
            ),
        },
        Question {
            id: "lea_2",
            domain: DomainKey::Leadership,
            text: LocalizedText::new(
                "Τα βασικά στελέχη εκτός οικογένειας διακρατούνται μέσω κινήτρων και σαφών προοπτικών εξέλιξης.",
                "Key non-family managers are retained through incentives and clear career paths.",
            ),
        },
        Question {
            id: "lea_3",
            domain: DomainKey::Leadership,
            text: LocalizedText::new(
                "Οι ρόλοι και η απόδοση των μελών της οικογένειας αξιολογούνται αξιοκρατικά.",
                "Roles and performance of family members are evaluated on merit.",
            ),
        },
        Question {
            id: "lea_4",
            domain: DomainKey::Leadership,
            text: LocalizedText::new(
                "Η ηγεσία μοιράζεται ανοιχτά τη στρατηγική πληροφόρηση με την επόμενη γενιά.",
                "Leadership shares strategic information openly with the next generation.",
            ),
        },
        // Wealth & risk management
        Question {
            id: "wea_1",
            domain: DomainKey::Wealth,
            text: LocalizedText::new(
                "Ο οικογενειακός πλούτος εκτός επιχείρησης διαχειρίζεται βάσει καταγεγραμμένης στρατηγικής.",
                "Family wealth outside the business is managed under a documented strategy.",
            ),
        },
        Question {
            id: "wea_2",
            domain: DomainKey::Wealth,
            text: LocalizedText::new(
                "Τα οικονομικά της επιχείρησης και τα προσωπικά οικονομικά είναι σαφώς διαχωρισμένα.",
                "Business and personal finances are clearly separated.",
            ),
        },
        Question {
            id: "wea_3",
            domain: DomainKey::Wealth,
            text: LocalizedText::new(
                "Οι βασικοί κίνδυνοι (ασφάλιση, ρευστότητα, συγκέντρωση) επανεξετάζονται περιοδικά.",
                "Key risks (insurance, liquidity, concentration) are reviewed periodically.",
            ),
        },
        Question {
            id: "wea_4",
            domain: DomainKey::Wealth,
            text: LocalizedText::new(
                "Οι στόχοι φιλανθρωπίας και οικογενειακής παρακαταθήκης είναι καθορισμένοι.",
                "Philanthropy and family legacy goals are defined.",
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(key: DomainKey, weight: f64) -> Domain {
        Domain {
            key,
            weight,
            label: LocalizedText::new("x", "x"),
        }
    }

    fn question(id: &'static str, key: DomainKey) -> Question {
        Question {
            id,
            domain: key,
            text: LocalizedText::new("x", "x"),
        }
    }

    #[test]
    fn standard_catalog_has_six_domains_of_four_questions() {
        let catalog = Catalog::standard().expect("standard catalog is valid");

        let keys: Vec<DomainKey> = catalog.domains().iter().map(|d| d.key).collect();
        assert_eq!(keys, DomainKey::ordered().to_vec());
        assert_eq!(catalog.questions().len(), 24);
        for key in DomainKey::ordered() {
            assert_eq!(catalog.questions_for_domain(key).len(), 4, "{key}");
        }

        let weights: Vec<f64> = catalog.domains().iter().map(|d| d.weight).collect();
        assert_eq!(weights, vec![0.20, 0.20, 0.15, 0.20, 0.15, 0.10]);
    }

    #[test]
    fn standard_catalog_has_text_in_both_languages() {
        let catalog = Catalog::standard().expect("standard catalog is valid");
        assert!(catalog
            .questions()
            .iter()
            .all(|q| !q.text.gr.is_empty() && !q.text.en.is_empty()));
        assert_eq!(
            catalog
                .domain(DomainKey::Succession)
                .map(|d| d.label.en),
            Some("Succession Planning")
        );
    }

    #[test]
    fn rejects_weights_that_do_not_sum_to_one() {
        let error = Catalog::new(
            vec![domain(DomainKey::Governance, 0.5), domain(DomainKey::Family, 0.4)],
            vec![
                question("a", DomainKey::Governance),
                question("b", DomainKey::Family),
            ],
        )
        .expect_err("weights sum to 0.9");

        match error {
            CatalogError::WeightSum { total } => assert!((total - 0.9).abs() < 1e-9),
            other => panic!("expected weight sum error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_questions_for_undefined_domains() {
        let error = Catalog::new(
            vec![domain(DomainKey::Governance, 1.0)],
            vec![
                question("a", DomainKey::Governance),
                question("b", DomainKey::Wealth),
            ],
        )
        .expect_err("wealth is not defined");

        assert_eq!(
            error,
            CatalogError::UnknownDomain {
                question: "b",
                domain: DomainKey::Wealth
            }
        );
    }

    #[test]
    fn rejects_domains_without_questions() {
        let error = Catalog::new(
            vec![domain(DomainKey::Governance, 0.5), domain(DomainKey::Family, 0.5)],
            vec![question("a", DomainKey::Governance)],
        )
        .expect_err("family has no questions");

        assert_eq!(error, CatalogError::EmptyDomain(DomainKey::Family));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let error = Catalog::new(
            vec![domain(DomainKey::Governance, 1.0)],
            vec![
                question("a", DomainKey::Governance),
                question("a", DomainKey::Governance),
            ],
        )
        .expect_err("duplicate question");
        assert_eq!(error, CatalogError::DuplicateQuestion("a"));

        let error = Catalog::new(
            vec![domain(DomainKey::Governance, 0.5), domain(DomainKey::Governance, 0.5)],
            vec![question("a", DomainKey::Governance)],
        )
        .expect_err("duplicate domain");
        assert_eq!(error, CatalogError::DuplicateDomain(DomainKey::Governance));
    }
}
