//! Unified question schema for a recurring research survey.
//!
//! The crate carries a compiled-in catalogue of question concepts: for each
//! one, its canonical wording, response scale, and the source column that held
//! its answers in every survey year it was asked. Consumers use the catalogue
//! to locate a concept in a given year's raw export and to decide which
//! questions support trend analysis. Loading survey data and doing statistics
//! on it is left to those consumers.
//!
//! Every query is total: unknown years, ids, or thresholds yield empty
//! results instead of errors. The catalogue is immutable once built, so
//! `QuestionCatalogue::shared` can be read from any thread.

pub mod catalog;
pub mod harmonize;

pub use catalog::{
    CATALOGUE_SCHEMA, COLUMN_FAMILY_SUFFIX, CORE_TREND_MIN_YEARS, DEFAULT_LONGITUDINAL_MIN_YEARS,
    QuestionCatalogue, QuestionCategory, QuestionId, QuestionMap, QuestionMapping, QuestionTable,
    QuestionType, ResponseScale, SurveyYear, validate_against_schema, validate_catalogue,
};
pub use harmonize::{
    HarmonizedColumnMapping, create_harmonized_column_mapping, harmonize_between,
    harmonize_response_scale, write_harmonized_column_mapping,
};

/// Split comma- or whitespace-delimited lists (e.g. `"2021, 2022 2024"`) into tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a list of survey years, rejecting anything that is not an integer.
pub fn parse_year_list(value: &str) -> anyhow::Result<Vec<SurveyYear>> {
    split_list(value)
        .iter()
        .map(|token| {
            token
                .parse::<SurveyYear>()
                .map_err(|err| anyhow::anyhow!("invalid survey year '{token}': {err}"))
        })
        .collect()
}
