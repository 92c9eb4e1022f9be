use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Calendar year of a survey wave (e.g. `2017`, `2024`).
pub type SurveyYear = i32;

/// Stable identifier for a question concept (e.g. `open_data_attitude`).
///
/// The id is the primary key across every category of the catalogue and does
/// not change when a year rewords the question or renumbers its column.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        QuestionId(value.to_string())
    }
}

/// Answer format of a question. Descriptive only; no query depends on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QuestionType {
    Likert5,
    Likert4,
    Likert3,
    MultipleChoice,
    MultipleSelect,
    OpenText,
    Demographic,
    Binary,
}

/// The four fixed partitions of the catalogue, listed in merge order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum QuestionCategory {
    Core,
    Demographic,
    Supplementary,
    Historical,
}

impl Serialize for QuestionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown question type '{value}'"))
        })
    }
}

impl QuestionType {
    pub const ALL: [QuestionType; 8] = [
        QuestionType::Likert5,
        QuestionType::Likert4,
        QuestionType::Likert3,
        QuestionType::MultipleChoice,
        QuestionType::MultipleSelect,
        QuestionType::OpenText,
        QuestionType::Demographic,
        QuestionType::Binary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Likert5 => "likert_5",
            QuestionType::Likert4 => "likert_4",
            QuestionType::Likert3 => "likert_3",
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::MultipleSelect => "multiple_select",
            QuestionType::OpenText => "open_text",
            QuestionType::Demographic => "demographic",
            QuestionType::Binary => "binary",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl Serialize for QuestionCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown question category '{value}'"))
        })
    }
}

impl QuestionCategory {
    /// Categories in the order `get_all_questions` merges them; later wins.
    pub const MERGE_ORDER: [QuestionCategory; 4] = [
        QuestionCategory::Core,
        QuestionCategory::Demographic,
        QuestionCategory::Supplementary,
        QuestionCategory::Historical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Core => "core",
            QuestionCategory::Demographic => "demographic",
            QuestionCategory::Supplementary => "supplementary",
            QuestionCategory::Historical => "historical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::MERGE_ORDER
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}
