pub mod answers;
pub mod catalog;
pub mod domain;
pub mod export;
pub mod report;
pub mod scoring;

pub use answers::AnswerSheet;
pub use catalog::{Catalog, CatalogError, QUESTIONNAIRE_VERSION};
pub use domain::{Band, Domain, DomainKey, InvalidScore, Language, Likert, LocalizedText, Question};
pub use export::{AnswerCsv, DerivedRecord, ExportError};
pub use report::{AssessmentInsights, ScoreReport, ScoreReportSummary};
pub use scoring::{Evaluation, MissingAnswers, ScoringConfig, ScoringEngine};
