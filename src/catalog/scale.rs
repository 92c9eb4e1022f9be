//! Named response scales shared by question definitions.
//!
//! Option order is significant: it carries the polarity of the scale
//! (negative first), which is what positional harmonization relies on.

use serde::{Deserialize, Serialize};

/// Closed set of reusable response scales.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ResponseScale {
    #[serde(rename = "AGREEMENT_5")]
    Agreement5,
    #[serde(rename = "AGREEMENT_5_ALT")]
    Agreement5Alt,
    #[serde(rename = "FREQUENCY_4")]
    Frequency4,
    #[serde(rename = "FREQUENCY_4_ALT")]
    Frequency4Alt,
    #[serde(rename = "YES_NO_UNSURE")]
    YesNoUnsure,
    #[serde(rename = "YES_NO_DONT_KNOW")]
    YesNoDontKnow,
    #[serde(rename = "CREDIT_3")]
    Credit3,
    #[serde(rename = "FAMILIARITY_3")]
    Familiarity3,
}

const AGREEMENT_5: &[&str] = &[
    "Strongly disagree",
    "Somewhat disagree",
    "Neutral",
    "Somewhat agree",
    "Strongly agree",
];
const AGREEMENT_5_ALT: &[&str] = &[
    "Strongly disagree",
    "Somewhat disagree",
    "Neutral / No opinion",
    "Somewhat agree",
    "Strongly agree",
];
const FREQUENCY_4: &[&str] = &["Never", "Rarely", "Sometimes", "Frequently"];
const FREQUENCY_4_ALT: &[&str] = &["Never", "Rarely", "Often", "Always"];
const YES_NO_UNSURE: &[&str] = &["Yes", "No", "Unsure"];
const YES_NO_DONT_KNOW: &[&str] = &["Yes", "No", "Don't know"];
const CREDIT_3: &[&str] = &["No, too little credit", "Yes", "No, too much credit"];
const FAMILIARITY_3: &[&str] = &[
    "I am familiar with the data principles",
    "I have previously heard of the data principles but I am not familiar with them",
    "I have never heard of the data principles before now",
];

impl ResponseScale {
    pub const ALL: [ResponseScale; 8] = [
        ResponseScale::Agreement5,
        ResponseScale::Agreement5Alt,
        ResponseScale::Frequency4,
        ResponseScale::Frequency4Alt,
        ResponseScale::YesNoUnsure,
        ResponseScale::YesNoDontKnow,
        ResponseScale::Credit3,
        ResponseScale::Familiarity3,
    ];

    /// Ordered option labels for the scale.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            ResponseScale::Agreement5 => AGREEMENT_5,
            ResponseScale::Agreement5Alt => AGREEMENT_5_ALT,
            ResponseScale::Frequency4 => FREQUENCY_4,
            ResponseScale::Frequency4Alt => FREQUENCY_4_ALT,
            ResponseScale::YesNoUnsure => YES_NO_UNSURE,
            ResponseScale::YesNoDontKnow => YES_NO_DONT_KNOW,
            ResponseScale::Credit3 => CREDIT_3,
            ResponseScale::Familiarity3 => FAMILIARITY_3,
        }
    }

    pub fn len(&self) -> usize {
        self.options().len()
    }

    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseScale::Agreement5 => "AGREEMENT_5",
            ResponseScale::Agreement5Alt => "AGREEMENT_5_ALT",
            ResponseScale::Frequency4 => "FREQUENCY_4",
            ResponseScale::Frequency4Alt => "FREQUENCY_4_ALT",
            ResponseScale::YesNoUnsure => "YES_NO_UNSURE",
            ResponseScale::YesNoDontKnow => "YES_NO_DONT_KNOW",
            ResponseScale::Credit3 => "CREDIT_3",
            ResponseScale::Familiarity3 => "FAMILIARITY_3",
        }
    }

    /// Owned copy of the labels, as stored on a `QuestionMapping`.
    pub fn to_labels(&self) -> Vec<String> {
        self.options().iter().map(|label| label.to_string()).collect()
    }

    /// Position of `label` within the scale, if present.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.options().iter().position(|option| *option == label)
    }
}
