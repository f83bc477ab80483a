mod derived;
mod record;

pub use derived::{DerivedDomain, DerivedRecord};

use super::answers::AnswerSheet;
use super::catalog::Catalog;
use super::domain::{DomainKey, Likert};
use record::{AnswerRowIn, AnswerRowOut};
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownQuestion {
        row: usize,
        question_id: String,
    },
    DuplicateQuestion {
        row: usize,
        question_id: String,
    },
    DomainMismatch {
        row: usize,
        question_id: String,
        expected: DomainKey,
        found: String,
    },
    InvalidScore {
        row: usize,
        question_id: String,
        value: String,
    },
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "failed to access answer file: {}", err),
            ExportError::Csv(err) => write!(f, "invalid answer CSV data: {}", err),
            ExportError::UnknownQuestion { row, question_id } => {
                write!(f, "row {row}: unknown question id '{question_id}'")
            }
            ExportError::DuplicateQuestion { row, question_id } => {
                write!(f, "row {row}: question '{question_id}' answered more than once")
            }
            ExportError::DomainMismatch {
                row,
                question_id,
                expected,
                found,
            } => write!(
                f,
                "row {row}: question '{question_id}' belongs to domain '{expected}', not '{found}'"
            ),
            ExportError::InvalidScore {
                row,
                question_id,
                value,
            } => write!(
                f,
                "row {row}: score '{value}' for question '{question_id}' is not an integer from 1 to 5"
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(err) => Some(err),
            ExportError::Csv(err) => Some(err),
            ExportError::UnknownQuestion { .. }
            | ExportError::DuplicateQuestion { .. }
            | ExportError::DomainMismatch { .. }
            | ExportError::InvalidScore { .. } => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Flat CSV record of an answer sheet: one row per catalog question.
///
/// Unanswered questions are written with an empty score, so exporting an
/// empty sheet produces a fill-in template.
pub struct AnswerCsv;

impl AnswerCsv {
    pub fn write<W: Write>(
        catalog: &Catalog,
        answers: &AnswerSheet,
        writer: W,
    ) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for question in catalog.questions() {
            let (label_gr, label_en) = catalog
                .domain(question.domain)
                .map(|domain| (domain.label.gr, domain.label.en))
                .unwrap_or_default();

            csv_writer.serialize(AnswerRowOut {
                question_id: question.id,
                domain_key: question.domain.as_str(),
                domain_label_gr: label_gr,
                domain_label_en: label_en,
                question_gr: question.text.gr,
                question_en: question.text.en,
                score: answers.score(question.id).map(Likert::value),
            })?;
        }

        csv_writer.flush()?;
        debug!(
            rows = catalog.questions().len(),
            answered = answers.len(),
            "answer record exported"
        );
        Ok(())
    }

    pub fn write_path<P: AsRef<Path>>(
        catalog: &Catalog,
        answers: &AnswerSheet,
        path: P,
    ) -> Result<(), ExportError> {
        let file = std::fs::File::create(path)?;
        Self::write(catalog, answers, file)
    }

    /// Parses an exported record back into an answer sheet.
    pub fn read<R: Read>(catalog: &Catalog, reader: R) -> Result<AnswerSheet, ExportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut answers = AnswerSheet::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (index, record) in csv_reader.deserialize::<AnswerRowIn>().enumerate() {
            // header is line 1
            let row = index + 2;
            let AnswerRowIn {
                question_id,
                domain_key,
                score,
            } = record?;

            let question = match catalog.question(&question_id) {
                Some(question) => question,
                None => return Err(ExportError::UnknownQuestion { row, question_id }),
            };

            if let Some(found) = domain_key {
                if DomainKey::parse(&found) != Some(question.domain) {
                    return Err(ExportError::DomainMismatch {
                        row,
                        question_id,
                        expected: question.domain,
                        found,
                    });
                }
            }

            if !seen.insert(question_id.clone()) {
                return Err(ExportError::DuplicateQuestion { row, question_id });
            }

            if let Some(value) = score {
                let parsed = value.parse::<u8>().ok().and_then(|raw| Likert::new(raw).ok());
                match parsed {
                    Some(likert) => {
                        answers.record(question_id, likert);
                    }
                    None => {
                        return Err(ExportError::InvalidScore {
                            row,
                            question_id,
                            value,
                        })
                    }
                }
            }
        }

        debug!(answered = answers.len(), "answer record imported");
        Ok(answers)
    }

    pub fn read_path<P: AsRef<Path>>(
        catalog: &Catalog,
        path: P,
    ) -> Result<AnswerSheet, ExportError> {
        let file = std::fs::File::open(path)?;
        Self::read(catalog, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "question_id,domain_key,domain_label_gr,domain_label_en,question_gr,question_en,score";

    fn catalog() -> Catalog {
        Catalog::standard().expect("standard catalog")
    }

    #[test]
    fn blank_template_lists_every_question_without_scores() {
        let catalog = catalog();
        let mut buffer = Vec::new();
        AnswerCsv::write(&catalog, &AnswerSheet::new(), &mut buffer).expect("export");

        let text = String::from_utf8(buffer).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(HEADER));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), 24);
        assert!(rows[0].starts_with("gov_1,governance,"));
        assert!(rows.iter().all(|row| row.ends_with(',')));

        let imported = AnswerCsv::read(&catalog, text.as_bytes()).expect("import template");
        assert!(imported.is_empty());
    }

    #[test]
    fn minimal_two_column_file_is_accepted() {
        let catalog = catalog();
        let answers = AnswerCsv::read(&catalog, Cursor::new("question_id,score\ngov_1, 4 \nfam_2,\n"))
            .expect("import");

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.score("gov_1").map(Likert::value), Some(4));
        assert_eq!(answers.score("fam_2"), None);
    }

    #[test]
    fn rejects_unknown_question_ids() {
        let catalog = catalog();
        let error = AnswerCsv::read(&catalog, Cursor::new("question_id,score\ngov_1,3\nxyz_9,2\n"))
            .expect_err("unknown id");

        match error {
            ExportError::UnknownQuestion { row, question_id } => {
                assert_eq!(row, 3);
                assert_eq!(question_id, "xyz_9");
            }
            other => panic!("expected unknown question, got {other:?}"),
        }
    }

    #[test]
    fn rejects_scores_outside_the_scale() {
        let catalog = catalog();
        for bad in ["0", "6", "3.5", "high"] {
            let csv = format!("question_id,score\nsuc_1,{bad}\n");
            let error = AnswerCsv::read(&catalog, Cursor::new(csv)).expect_err("invalid score");
            match error {
                ExportError::InvalidScore { value, .. } => assert_eq!(value, bad),
                other => panic!("expected invalid score for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_duplicate_rows_and_wrong_domains() {
        let catalog = catalog();
        let error = AnswerCsv::read(
            &catalog,
            Cursor::new("question_id,score\nown_1,3\nown_1,4\n"),
        )
        .expect_err("duplicate");
        assert!(matches!(error, ExportError::DuplicateQuestion { row: 3, .. }));

        let error = AnswerCsv::read(
            &catalog,
            Cursor::new("question_id,domain_key,score\nown_1,wealth,3\n"),
        )
        .expect_err("wrong domain");
        assert_eq!(
            error.to_string(),
            "row 2: question 'own_1' belongs to domain 'ownership', not 'wealth'"
        );
    }

    #[test]
    fn read_path_propagates_io_errors() {
        let error = AnswerCsv::read_path(&catalog(), "./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            ExportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
