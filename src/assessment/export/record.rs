use serde::{Deserialize, Deserializer, Serialize};

/// One exported question row. Column order is the file's header order.
#[derive(Debug, Serialize)]
pub(crate) struct AnswerRowOut<'a> {
    pub(crate) question_id: &'a str,
    pub(crate) domain_key: &'a str,
    pub(crate) domain_label_gr: &'a str,
    pub(crate) domain_label_en: &'a str,
    pub(crate) question_gr: &'a str,
    pub(crate) question_en: &'a str,
    pub(crate) score: Option<u8>,
}

/// Imported row. Only the id and score are authoritative; the descriptive
/// columns may be absent.
#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRowIn {
    pub(crate) question_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) domain_key: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) score: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
