//! Data-entry checks for the literal catalogue.
//!
//! The query path never validates; these helpers exist for tests and the
//! `schema-report --validate` mode. `validate_catalogue` returns every problem
//! it finds rather than stopping at the first so a bad edit surfaces in full.

use crate::catalog::identity::{QuestionCategory, QuestionId, SurveyYear};
use crate::catalog::index::QuestionCatalogue;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// JSON Schema for the document produced by `QuestionCatalogue::to_json`.
pub const CATALOGUE_SCHEMA: &str = include_str!("../../schema/question_catalogue.schema.json");

/// Check the structural invariants of every entry in every category.
pub fn validate_catalogue(catalogue: &QuestionCatalogue) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen: BTreeMap<&QuestionId, QuestionCategory> = BTreeMap::new();

    for category in QuestionCategory::MERGE_ORDER {
        for (key, question) in catalogue.category(category) {
            let label = format!("{}/{}", category.as_str(), key.0);

            if let Some(first) = seen.insert(key, category) {
                errors.push(format!(
                    "{label}: question id also declared in {}",
                    first.as_str()
                ));
            }
            if &question.question_id != key {
                errors.push(format!(
                    "{label}: entry declares question_id '{}'",
                    question.question_id.0
                ));
            }
            if question.years_available.is_empty() {
                errors.push(format!("{label}: years_available is empty"));
            }
            if question.response_scale.is_empty() {
                errors.push(format!("{label}: response_scale is empty"));
            }

            let mapped: BTreeSet<SurveyYear> = question.column_mappings.keys().copied().collect();
            for year in question.years_available.difference(&mapped) {
                errors.push(format!("{label}: year {year} has no column mapping"));
            }
            for year in mapped.difference(&question.years_available) {
                errors.push(format!(
                    "{label}: column mapping for {year} is not in years_available"
                ));
            }
            for (year, column) in &question.column_mappings {
                if column.trim().is_empty() {
                    errors.push(format!("{label}: column for {year} is blank"));
                }
            }
        }
    }

    errors
}

/// Validate an exported catalogue document against `CATALOGUE_SCHEMA`.
pub fn validate_against_schema(document: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(CATALOGUE_SCHEMA).context("parsing bundled catalogue schema")?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling catalogue schema: {err}"))?;

    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| format!("{}: {err}", err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("question catalogue failed schema validation:\n{details}");
    }
    Ok(())
}
