//! The atomic catalogue entry: one question concept across survey years.
//!
//! A `QuestionMapping` pairs canonical wording and a response scale with the
//! per-year source column that stored the answers. Entries are plain data;
//! nothing here checks that `years_available` and `column_mappings` agree
//! (see `catalog::validation` for the test-time checks).

use crate::catalog::identity::{QuestionId, QuestionType, SurveyYear};
use crate::catalog::index::DEFAULT_LONGITUDINAL_MIN_YEARS;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Suffix marking a column family fanned out across several raw columns.
pub const COLUMN_FAMILY_SUFFIX: &str = "_*";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Definition of one question concept and where it lives in each year.
pub struct QuestionMapping {
    pub question_id: QuestionId,
    pub question_text: String,
    pub question_type: QuestionType,
    pub response_scale: Vec<String>,
    pub years_available: BTreeSet<SurveyYear>,
    pub column_mappings: BTreeMap<SurveyYear, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl QuestionMapping {
    /// Number of survey years in which the concept was asked.
    pub fn year_count(&self) -> usize {
        self.years_available.len()
    }

    pub fn is_available_in(&self, year: SurveyYear) -> bool {
        self.years_available.contains(&year)
    }

    /// Asked in at least `min_years` years. Any threshold of zero or below holds.
    pub fn spans_at_least(&self, min_years: i64) -> bool {
        i64::try_from(self.year_count()).unwrap_or(i64::MAX) >= min_years
    }

    /// Spans `DEFAULT_LONGITUDINAL_MIN_YEARS`, so usable for trend comparison.
    pub fn is_longitudinal(&self) -> bool {
        self.spans_at_least(DEFAULT_LONGITUDINAL_MIN_YEARS)
    }

    /// Source column (or column family) for `year`.
    pub fn column_for(&self, year: SurveyYear) -> Option<&str> {
        self.column_mappings.get(&year).map(String::as_str)
    }

    /// Prefix shared by a wildcard column family, e.g. `Q2.3_` for `Q2.3_*`.
    ///
    /// Returns `None` when the year maps to a single concrete column or is
    /// not mapped at all.
    pub fn column_family_prefix(&self, year: SurveyYear) -> Option<&str> {
        let column = self.column_for(year)?;
        if !column.ends_with(COLUMN_FAMILY_SUFFIX) {
            return None;
        }
        column.strip_suffix('*')
    }

    /// Whether a raw export column holds answers to this question in `year`.
    ///
    /// Concrete columns must match exactly. A family such as `Q2.6_*` matches
    /// any column starting with `Q2.6_` followed by at least one character.
    pub fn column_matches(&self, year: SurveyYear, raw_column: &str) -> bool {
        if let Some(prefix) = self.column_family_prefix(year) {
            return raw_column.len() > prefix.len() && raw_column.starts_with(prefix);
        }
        self.column_for(year) == Some(raw_column)
    }
}
