//! Harmonization helpers that consume catalogue data.
//!
//! `harmonize_response_scale` is a positional mapping, not a semantic one: it
//! assumes the two scales line up in length and polarity and falls back to the
//! untouched response on any mismatch. Callers that need to tell a translated
//! label from a passthrough must check membership in the target scale.

use crate::catalog::{QuestionCatalogue, ResponseScale, SurveyYear};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io::Write;

/// Question id → (year → source column) for every catalogued question.
pub type HarmonizedColumnMapping = BTreeMap<String, BTreeMap<SurveyYear, String>>;

/// Map `response` to the label at the same position in `target_scale`.
///
/// Returns `response` unchanged when it is not part of `source_scale`, or
/// when its position has no counterpart in a shorter `target_scale`.
pub fn harmonize_response_scale<S, T>(
    response: &str,
    source_scale: &[S],
    target_scale: &[T],
) -> String
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    source_scale
        .iter()
        .position(|option| option.as_ref() == response)
        .and_then(|idx| target_scale.get(idx))
        .map(|label| label.as_ref().to_string())
        .unwrap_or_else(|| response.to_string())
}

/// `harmonize_response_scale` over two named scales.
pub fn harmonize_between(response: &str, source: ResponseScale, target: ResponseScale) -> String {
    harmonize_response_scale(response, source.options(), target.options())
}

/// Project the shared catalogue onto its per-year column mappings.
pub fn create_harmonized_column_mapping() -> HarmonizedColumnMapping {
    QuestionCatalogue::shared()
        .get_all_questions()
        .into_iter()
        .map(|(id, question)| (id.0.clone(), question.column_mappings.clone()))
        .collect()
}

/// Write the harmonized column mapping as pretty-printed JSON.
pub fn write_harmonized_column_mapping<W: Write>(mut writer: W) -> Result<()> {
    let mapping = create_harmonized_column_mapping();
    serde_json::to_writer_pretty(&mut writer, &mapping)
        .context("serializing harmonized column mapping")?;
    writeln!(writer).context("writing harmonized column mapping")?;
    writer.flush().context("flushing harmonized column mapping")?;
    Ok(())
}
