//! Hand-authored question definitions, one builder per category.
//!
//! Each builder returns a literal table. Years and columns are declared
//! separately and never derived from each other; `validate_catalogue` flags
//! an entry whose `years_available` drifts from its `column_mappings`.

use crate::catalog::identity::{QuestionId, QuestionType, SurveyYear};
use crate::catalog::model::QuestionMapping;
use crate::catalog::scale::ResponseScale;
use std::collections::BTreeMap;

/// Questions of one category keyed by id.
pub type QuestionTable = BTreeMap<QuestionId, QuestionMapping>;

struct Def<'a> {
    id: &'a str,
    text: &'a str,
    kind: QuestionType,
    scale: Vec<String>,
    years: &'a [SurveyYear],
    columns: &'a [(SurveyYear, &'a str)],
    notes: &'a str,
}

fn table(defs: Vec<Def<'_>>) -> QuestionTable {
    defs.into_iter()
        .map(|def| {
            let id = QuestionId::from(def.id);
            let mapping = QuestionMapping {
                question_id: id.clone(),
                question_text: def.text.to_string(),
                question_type: def.kind,
                response_scale: def.scale,
                years_available: def.years.iter().copied().collect(),
                column_mappings: def
                    .columns
                    .iter()
                    .map(|(year, column)| (*year, column.to_string()))
                    .collect(),
                notes: Some(def.notes.to_string()).filter(|n| !n.is_empty()),
            };
            (id, mapping)
        })
        .collect()
}

fn labels(options: &[&str]) -> Vec<String> {
    options.iter().map(|label| label.to_string()).collect()
}

pub(crate) fn core_questions() -> QuestionTable {
    table(vec![
        Def {
            id: "open_access_attitude",
            text: "Making research articles open access should be common scholarly practice",
            kind: QuestionType::Likert5,
            scale: ResponseScale::Agreement5.to_labels(),
            years: &[2021, 2022, 2023, 2024],
            columns: &[
                (2021, "Q2.7_1"),
                (2022, "Q2.11_1"),
                (2023, "Q2.10.a"),
                (2024, "Q12_1"),
            ],
            notes: "Highest consistency across years - core trend indicator",
        },
        Def {
            id: "open_data_attitude",
            text: "Making research data openly available should be common scholarly practice",
            kind: QuestionType::Likert5,
            scale: ResponseScale::Agreement5.to_labels(),
            years: &[2021, 2022, 2023, 2024],
            columns: &[
                (2021, "Q2.7_2"),
                (2022, "Q2.11_2"),
                (2023, "Q2.10.b"),
                (2024, "Q12_2"),
            ],
            notes: "Core data sharing attitude - primary outcome measure",
        },
        Def {
            id: "open_peer_review_attitude",
            text: "Making peer review open should be common scholarly practice",
            kind: QuestionType::Likert5,
            scale: ResponseScale::Agreement5.to_labels(),
            years: &[2022, 2023, 2024],
            columns: &[(2022, "Q2.11_3"), (2023, "Q2.10.c"), (2024, "Q12_3")],
            notes: "Introduced in 2022 - good trend indicator",
        },
        Def {
            id: "preprinting_attitude",
            text: "Preprinting should be common scholarly practice",
            kind: QuestionType::Likert5,
            scale: ResponseScale::Agreement5.to_labels(),
            years: &[2022, 2023, 2024],
            columns: &[(2022, "Q2.11_4"), (2023, "Q2.10.d"), (2024, "Q12_4")],
            notes: "Introduced in 2022 - tracks preprint adoption attitudes",
        },
        Def {
            id: "data_sharing_frequency",
            text: "How often have you made your research data openly available?",
            kind: QuestionType::Likert4,
            scale: ResponseScale::Frequency4.to_labels(),
            years: &[2017],
            columns: &[(2017, "Q2.2")],
            notes: "Core behavioral measure - need to map similar questions in other years",
        },
        Def {
            id: "credit_for_sharing",
            text: "Do you think researchers currently get sufficient credit for sharing data?",
            kind: QuestionType::MultipleChoice,
            scale: ResponseScale::Credit3.to_labels(),
            years: &[2019, 2022],
            columns: &[(2019, "Q2.4"), (2022, "Q3.2")],
            notes: "Important motivational factor",
        },
        Def {
            id: "fair_principles_awareness",
            text: "How familiar are you with FAIR data principles (Findable, Accessible, Interoperable, Reusable)?",
            kind: QuestionType::MultipleChoice,
            scale: ResponseScale::Familiarity3.to_labels(),
            years: &[2022, 2023],
            columns: &[(2022, "Q3.1_1"), (2023, "Q2.11.a")],
            notes: "Key knowledge indicator for data management",
        },
    ])
}

pub(crate) fn demographic_questions() -> QuestionTable {
    table(vec![
        Def {
            id: "job_title",
            text: "Which of the following job titles best applies to you?",
            kind: QuestionType::MultipleChoice,
            scale: labels(&[
                "Professor",
                "Associate Professor",
                "Research Scientist",
                "PhD Student",
                "Postdoc",
                "Other",
            ]),
            years: &[2017, 2019, 2022, 2023, 2024],
            columns: &[
                (2017, "Q10.5"),
                (2019, "Q6.5"),
                (2022, "Q2.6"),
                (2023, "Q2.6"),
                (2024, "Q7"),
            ],
            notes: "Response categories vary by year but can be harmonized",
        },
        Def {
            id: "research_area",
            text: "Which of the following best describes your primary area of interest?",
            kind: QuestionType::MultipleChoice,
            scale: labels(&["Medicine", "Engineering", "Physics", "Biology", "Other"]),
            years: &[2021, 2022, 2023, 2024],
            columns: &[(2021, "Q2.4"), (2022, "Q2.7"), (2023, "Q2.7"), (2024, "Q8")],
            notes: "Consistent categories with some variation",
        },
        Def {
            id: "publication_history",
            text: "When was the last occasion that you published or submitted a manuscript to a journal?",
            kind: QuestionType::MultipleChoice,
            scale: labels(&[
                "Within the last year",
                "1-2 years ago",
                "3-5 years ago",
                "More than 5 years ago",
                "Never",
            ]),
            years: &[2021, 2022, 2023, 2024],
            columns: &[(2021, "Q2.1"), (2022, "Q2.3"), (2023, "Q2.1"), (2024, "Q4")],
            notes: "Good indicator of research activity level",
        },
        Def {
            id: "organization_type",
            text: "Which type of organisation do you work in?",
            kind: QuestionType::MultipleChoice,
            scale: labels(&[
                "University",
                "Research institution",
                "Medical school",
                "Private company",
                "Other",
            ]),
            years: &[2022, 2023, 2024],
            columns: &[(2022, "Q2.4"), (2023, "Q2.4"), (2024, "Q5")],
            notes: "Institutional context indicator",
        },
    ])
}

pub(crate) fn supplementary_questions() -> QuestionTable {
    table(vec![
        Def {
            id: "funder_mandate_support",
            text: "Should funders make the sharing of research data part of their requirements for awarding grants?",
            kind: QuestionType::Likert3,
            scale: ResponseScale::YesNoDontKnow.to_labels(),
            years: &[2019],
            columns: &[(2019, "Q2.2")],
            notes: "Important policy question - 2019 focus",
        },
        Def {
            id: "national_mandate_support",
            text: "How supportive would you be of a national mandate for making primary research data openly available?",
            kind: QuestionType::Likert5,
            scale: labels(&[
                "Strongly oppose",
                "Somewhat oppose",
                "Neutral",
                "Somewhat support",
                "Strongly support",
            ]),
            years: &[2019],
            columns: &[(2019, "Q2.3")],
            notes: "Policy attitude indicator",
        },
        Def {
            id: "care_principles_awareness",
            text: "How familiar are you with CARE principles for Indigenous Data Governance?",
            kind: QuestionType::MultipleChoice,
            scale: ResponseScale::Familiarity3.to_labels(),
            years: &[2022],
            columns: &[(2022, "Q3.1_2")],
            notes: "Ethical data governance awareness",
        },
    ])
}

/// Questions with rich 2017 baseline data and no later counterpart yet.
pub(crate) fn historical_questions() -> QuestionTable {
    table(vec![
        Def {
            id: "data_sharing_motivations",
            text: "What circumstances would motivate you to share your data?",
            kind: QuestionType::MultipleSelect,
            scale: labels(&[
                "Institution requirement",
                "Funder requirement",
                "Transparency",
                "Credit",
                "Other",
            ]),
            years: &[2017],
            columns: &[(2017, "Q2.3_*")],
            notes: "Comprehensive motivation analysis - 2017 baseline",
        },
        Def {
            id: "data_sharing_effort",
            text: "How much effort is typically required to make your data re-usable by others?",
            kind: QuestionType::Likert4,
            scale: labels(&["No effort", "Little effort", "Some effort", "A lot of effort"]),
            years: &[2017],
            columns: &[(2017, "Q2.5")],
            notes: "Barrier assessment - effort required",
        },
        Def {
            id: "data_ownership_before_pub",
            text: "Who owns the data you produce during the course of your research before publication?",
            kind: QuestionType::MultipleSelect,
            scale: labels(&["You", "Your institution", "Your funder", "Other"]),
            years: &[2017],
            columns: &[(2017, "Q2.6_*")],
            notes: "Ownership understanding - pre-publication",
        },
        Def {
            id: "data_ownership_after_pub",
            text: "Who owns the data you produce during the course of your research after publication?",
            kind: QuestionType::MultipleSelect,
            scale: labels(&["You", "Your institution", "Your funder", "Other"]),
            years: &[2017],
            columns: &[(2017, "Q2.7_*")],
            notes: "Ownership understanding - post-publication",
        },
    ])
}
