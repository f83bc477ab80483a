use super::catalog::Catalog;
use super::domain::Likert;
use std::collections::BTreeMap;

/// One respondent's answers for the current session.
///
/// The sheet is owned by the caller and handed to the scoring engine by
/// reference; it never checks ids against a catalog on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    scores: BTreeMap<String, Likert>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a score, returning the one it replaced.
    pub fn record(&mut self, question_id: impl Into<String>, score: Likert) -> Option<Likert> {
        self.scores.insert(question_id.into(), score)
    }

    pub fn clear(&mut self, question_id: &str) -> Option<Likert> {
        self.scores.remove(question_id)
    }

    pub fn score(&self, question_id: &str) -> Option<Likert> {
        self.scores.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Likert)> {
        self.scores.iter().map(|(id, score)| (id.as_str(), *score))
    }

    /// Catalog questions without an answer, in catalog order.
    pub fn missing(&self, catalog: &Catalog) -> Vec<&'static str> {
        catalog
            .question_ids()
            .filter(|id| !self.scores.contains_key(*id))
            .collect()
    }

    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        catalog.question_ids().all(|id| self.scores.contains_key(id))
    }
}

impl<S: Into<String>> FromIterator<(S, Likert)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (S, Likert)>>(iter: I) -> Self {
        Self {
            scores: iter
                .into_iter()
                .map(|(id, score)| (id.into(), score))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn likert(value: u8) -> Likert {
        Likert::new(value).expect("valid score")
    }

    #[test]
    fn record_overwrites_previous_answer() {
        let mut sheet = AnswerSheet::new();
        assert_eq!(sheet.record("gov_1", likert(2)), None);
        assert_eq!(sheet.record("gov_1", likert(4)), Some(likert(2)));
        assert_eq!(sheet.score("gov_1"), Some(likert(4)));
        assert_eq!(sheet.len(), 1);

        assert_eq!(sheet.clear("gov_1"), Some(likert(4)));
        assert!(sheet.is_empty());
    }

    #[test]
    fn missing_lists_unanswered_questions_in_catalog_order() {
        let catalog = Catalog::standard().expect("catalog");
        let mut sheet: AnswerSheet = catalog
            .question_ids()
            .map(|id| (id, likert(3)))
            .collect();
        assert!(sheet.is_complete(&catalog));

        sheet.clear("wea_2");
        sheet.clear("gov_3");
        assert_eq!(sheet.missing(&catalog), vec!["gov_3", "wea_2"]);
        assert!(!sheet.is_complete(&catalog));
    }

    #[test]
    fn answers_for_unknown_questions_do_not_count_toward_completeness() {
        let catalog = Catalog::standard().expect("catalog");
        let mut sheet = AnswerSheet::new();
        sheet.record("not_in_catalog", likert(5));
        assert_eq!(sheet.missing(&catalog).len(), 24);
    }
}
