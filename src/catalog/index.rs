//! The question catalogue and its read-only queries.
//!
//! All four category tables are built eagerly in `QuestionCatalogue::new`, so
//! a catalogue value is complete before any accessor can observe it. No
//! public method mutates a catalogue after construction; the `shared`
//! instance is read from any thread without locking.

use crate::catalog::definitions::{
    QuestionTable, core_questions, demographic_questions, historical_questions,
    supplementary_questions,
};
use crate::catalog::identity::{QuestionCategory, QuestionId, SurveyYear};
use crate::catalog::model::QuestionMapping;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Borrowed view of catalogue entries keyed by question id.
pub type QuestionMap<'a> = BTreeMap<&'a QuestionId, &'a QuestionMapping>;

/// Minimum number of years for a core question to count toward headline trends.
pub const CORE_TREND_MIN_YEARS: usize = 3;

/// Default threshold used by `get_longitudinal_questions`.
pub const DEFAULT_LONGITUDINAL_MIN_YEARS: i64 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Immutable registry of question definitions split into four categories.
pub struct QuestionCatalogue {
    core: QuestionTable,
    demographic: QuestionTable,
    supplementary: QuestionTable,
    historical: QuestionTable,
}

#[derive(Serialize)]
struct CatalogueDocument<'a> {
    categories: BTreeMap<&'static str, Vec<&'a QuestionMapping>>,
}

impl Default for QuestionCatalogue {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionCatalogue {
    /// Build a fresh catalogue from the literal definitions.
    pub fn new() -> Self {
        Self {
            core: core_questions(),
            demographic: demographic_questions(),
            supplementary: supplementary_questions(),
            historical: historical_questions(),
        }
    }

    /// Process-wide catalogue, built on first use.
    pub fn shared() -> &'static QuestionCatalogue {
        static SHARED: OnceLock<QuestionCatalogue> = OnceLock::new();
        SHARED.get_or_init(QuestionCatalogue::new)
    }

    pub fn core_questions(&self) -> &QuestionTable {
        &self.core
    }

    pub fn demographic_questions(&self) -> &QuestionTable {
        &self.demographic
    }

    pub fn supplementary_questions(&self) -> &QuestionTable {
        &self.supplementary
    }

    pub fn historical_questions(&self) -> &QuestionTable {
        &self.historical
    }

    /// Table backing one category.
    pub fn category(&self, category: QuestionCategory) -> &QuestionTable {
        match category {
            QuestionCategory::Core => &self.core,
            QuestionCategory::Demographic => &self.demographic,
            QuestionCategory::Supplementary => &self.supplementary,
            QuestionCategory::Historical => &self.historical,
        }
    }

    #[cfg(test)]
    pub(crate) fn category_mut(&mut self, category: QuestionCategory) -> &mut QuestionTable {
        match category {
            QuestionCategory::Core => &mut self.core,
            QuestionCategory::Demographic => &mut self.demographic,
            QuestionCategory::Supplementary => &mut self.supplementary,
            QuestionCategory::Historical => &mut self.historical,
        }
    }

    /// Union of every category.
    ///
    /// Categories merge in `QuestionCategory::MERGE_ORDER`; if an id were ever
    /// declared twice the later category's entry replaces the earlier one.
    /// Ids are expected to be unique, which `validate_catalogue` checks.
    pub fn get_all_questions(&self) -> QuestionMap<'_> {
        let mut all = BTreeMap::new();
        for category in QuestionCategory::MERGE_ORDER {
            all.extend(self.category(category).iter());
        }
        all
    }

    /// Questions asked in `year`; empty for years without a survey wave.
    pub fn get_questions_by_year(&self, year: SurveyYear) -> QuestionMap<'_> {
        self.filter_all(|question| question.is_available_in(year))
    }

    /// Questions asked in at least `min_years` years.
    ///
    /// A threshold of zero or below returns everything; one above the widest
    /// span returns nothing.
    pub fn get_longitudinal_questions(&self, min_years: i64) -> QuestionMap<'_> {
        self.filter_all(|question| question.spans_at_least(min_years))
    }

    /// Core questions present in three or more years.
    ///
    /// Only the core category is considered, however many years questions in
    /// the other categories span.
    pub fn get_core_trend_questions(&self) -> QuestionMap<'_> {
        self.core
            .iter()
            .filter(|(_, question)| question.year_count() >= CORE_TREND_MIN_YEARS)
            .collect()
    }

    /// Look up a question in the merged view.
    pub fn question(&self, id: &str) -> Option<&QuestionMapping> {
        let id = QuestionId::from(id);
        QuestionCategory::MERGE_ORDER
            .into_iter()
            .rev()
            .find_map(|category| self.category(category).get(&id))
    }

    /// Category whose entry wins in the merged view for `id`.
    pub fn category_of(&self, id: &str) -> Option<QuestionCategory> {
        let id = QuestionId::from(id);
        QuestionCategory::MERGE_ORDER
            .into_iter()
            .rev()
            .find(|category| self.category(*category).contains_key(&id))
    }

    /// Source column for a question in a given year.
    pub fn column_for(&self, id: &str, year: SurveyYear) -> Option<&str> {
        self.question(id)?.column_for(year)
    }

    /// Every year referenced by any question, ascending.
    pub fn survey_years(&self) -> BTreeSet<SurveyYear> {
        self.get_all_questions()
            .values()
            .flat_map(|question| question.years_available.iter().copied())
            .collect()
    }

    /// Total number of entries across categories, counting duplicates.
    pub fn len(&self) -> usize {
        QuestionCategory::MERGE_ORDER
            .into_iter()
            .map(|category| self.category(category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Export the catalogue as `{ "categories": { "<name>": [...] } }`.
    pub fn to_json(&self) -> Result<Value> {
        let categories = QuestionCategory::MERGE_ORDER
            .into_iter()
            .map(|category| {
                (
                    category.as_str(),
                    self.category(category).values().collect::<Vec<_>>(),
                )
            })
            .collect();
        serde_json::to_value(CatalogueDocument { categories })
            .context("serializing question catalogue")
    }

    fn filter_all<F>(&self, keep: F) -> QuestionMap<'_>
    where
        F: Fn(&QuestionMapping) -> bool,
    {
        self.get_all_questions()
            .into_iter()
            .filter(|(_, question)| keep(*question))
            .collect()
    }
}
