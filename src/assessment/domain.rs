use serde::{Deserialize, Serialize};
use std::fmt;

/// Weighted category of the assessment. Declaration order is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainKey {
    Governance,
    Family,
    Ownership,
    Succession,
    Leadership,
    Wealth,
}

impl DomainKey {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Governance,
            Self::Family,
            Self::Ownership,
            Self::Succession,
            Self::Leadership,
            Self::Wealth,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Governance => "governance",
            Self::Family => "family",
            Self::Ownership => "ownership",
            Self::Succession => "succession",
            Self::Leadership => "leadership",
            Self::Wealth => "wealth",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two languages the questionnaire ships with. Greek is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    Gr,
    En,
}

impl Language {
    pub const fn ordered() -> [Self; 2] {
        [Self::Gr, Self::En]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Gr => "GR",
            Self::En => "EN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "GR" | "EL" => Some(Self::Gr),
            "EN" => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Static text available in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub gr: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(gr: &'static str, en: &'static str) -> Self {
        Self { gr, en }
    }

    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Gr => self.gr,
            Language::En => self.en,
        }
    }
}

/// Qualitative classification of an average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Band {
    Red,
    Amber,
    Green,
}

impl Band {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Amber => "AMBER",
            Self::Green => "GREEN",
        }
    }

    pub const fn label(self, language: Language) -> &'static str {
        let text = match self {
            Self::Red => LocalizedText::new("Κόκκινο", "Red"),
            Self::Amber => LocalizedText::new("Πορτοκαλί", "Amber"),
            Self::Green => LocalizedText::new("Πράσινο", "Green"),
        };
        text.get(language)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single answer on the 1-5 Likert scale.
///
/// Construction is the input boundary: the scoring engine assumes every
/// `Likert` it sees is already in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Likert(u8);

impl Likert {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, InvalidScore> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidScore(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Likert {
    type Error = InvalidScore;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Likert> for u8 {
    fn from(value: Likert) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("score {0} is outside the 1-5 scale")]
pub struct InvalidScore(pub u8);

/// Reference data for one weighted domain.
#[derive(Debug, Clone, Serialize)]
pub struct Domain {
    pub key: DomainKey,
    pub weight: f64,
    pub label: LocalizedText,
}

/// Reference data for one questionnaire item.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub domain: DomainKey,
    pub text: LocalizedText,
}
