// Integration suite for the question catalogue; exercises the public query
// contracts, the harmonization helpers, and the catalogue's data-entry
// invariants so a bad edit to the literal definitions surfaces in one place.

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use survey_schema::{
    QuestionCatalogue, QuestionCategory, QuestionId, QuestionMap, ResponseScale, SurveyYear,
    create_harmonized_column_mapping, harmonize_response_scale, validate_against_schema,
    validate_catalogue, write_harmonized_column_mapping,
};
use tempfile::NamedTempFile;

const OBSERVED_YEARS: [SurveyYear; 6] = [2017, 2019, 2021, 2022, 2023, 2024];

fn id_set(map: &QuestionMap<'_>) -> BTreeSet<String> {
    map.keys().map(|id| id.0.clone()).collect()
}

// Every year a question claims must have a source column, and vice versa.
#[test]
fn column_mapping_keys_equal_years_available() {
    let catalogue = QuestionCatalogue::new();
    for (id, question) in catalogue.get_all_questions() {
        let mapped: BTreeSet<SurveyYear> = question.column_mappings.keys().copied().collect();
        assert_eq!(
            mapped, question.years_available,
            "{} has mismatched years and columns",
            id.0
        );
        assert!(!question.years_available.is_empty(), "{} has no years", id.0);
    }
}

// Ids must be unique across the four categories combined; the merged view
// would otherwise silently drop an entry.
#[test]
fn question_ids_unique_across_categories() {
    let catalogue = QuestionCatalogue::new();
    let mut seen: BTreeMap<&QuestionId, QuestionCategory> = BTreeMap::new();
    for category in QuestionCategory::MERGE_ORDER {
        for id in catalogue.category(category).keys() {
            if let Some(previous) = seen.insert(id, category) {
                panic!(
                    "{} declared in both {} and {}",
                    id.0,
                    previous.as_str(),
                    category.as_str()
                );
            }
        }
    }
    assert_eq!(seen.len(), catalogue.get_all_questions().len());
    assert_eq!(catalogue.len(), catalogue.get_all_questions().len());
}

#[test]
fn literal_catalogue_passes_validation() -> Result<()> {
    let catalogue = QuestionCatalogue::shared();
    let problems = validate_catalogue(catalogue);
    assert!(problems.is_empty(), "catalogue problems: {problems:#?}");
    validate_against_schema(&catalogue.to_json()?)
}

#[test]
fn category_sizes() {
    let catalogue = QuestionCatalogue::new();
    assert_eq!(catalogue.core_questions().len(), 7);
    assert_eq!(catalogue.demographic_questions().len(), 4);
    assert_eq!(catalogue.supplementary_questions().len(), 3);
    assert_eq!(catalogue.historical_questions().len(), 4);
    assert_eq!(catalogue.get_all_questions().len(), 18);
}

// get_questions_by_year must agree with a direct filter for every observed
// wave and return nothing for years without one.
#[test]
fn questions_by_year_matches_direct_filter() {
    let catalogue = QuestionCatalogue::new();
    let all = catalogue.get_all_questions();
    for year in OBSERVED_YEARS {
        let expected: BTreeSet<String> = all
            .iter()
            .filter(|(_, q)| q.years_available.contains(&year))
            .map(|(id, _)| id.0.clone())
            .collect();
        let actual = id_set(&catalogue.get_questions_by_year(year));
        assert!(!actual.is_empty(), "{year} should have questions");
        assert_eq!(actual, expected, "mismatch for {year}");
    }
    for empty_year in [2018, 2020, 2025, 0, -1] {
        assert!(catalogue.get_questions_by_year(empty_year).is_empty());
    }
}

#[test]
fn questions_by_year_spot_checks() {
    let catalogue = QuestionCatalogue::new();
    assert_eq!(
        id_set(&catalogue.get_questions_by_year(2019)),
        BTreeSet::from(
            [
                "credit_for_sharing",
                "funder_mandate_support",
                "job_title",
                "national_mandate_support",
            ]
            .map(String::from)
        )
    );
    assert_eq!(catalogue.get_questions_by_year(2024).len(), 8);
    assert_eq!(catalogue.get_questions_by_year(2017).len(), 6);
}

#[test]
fn longitudinal_threshold_semantics() {
    let catalogue = QuestionCatalogue::new();
    let all = catalogue.get_all_questions();

    assert_eq!(catalogue.get_longitudinal_questions(1), all);
    assert_eq!(catalogue.get_longitudinal_questions(0), all);
    assert_eq!(catalogue.get_longitudinal_questions(-5), all);

    let widest = all.values().map(|q| q.year_count()).max().expect("non-empty");
    assert_eq!(widest, 5);
    assert_eq!(catalogue.get_longitudinal_questions(5).len(), 1);
    assert!(catalogue.get_longitudinal_questions(6).is_empty());
    assert!(catalogue.get_longitudinal_questions(i64::MAX).is_empty());

    for k in 1..=6 {
        let expected: BTreeSet<String> = all
            .iter()
            .filter(|(_, q)| q.year_count() >= k as usize)
            .map(|(id, _)| id.0.clone())
            .collect();
        assert_eq!(id_set(&catalogue.get_longitudinal_questions(k)), expected);
    }

    let default = catalogue.get_longitudinal_questions(survey_schema::DEFAULT_LONGITUDINAL_MIN_YEARS);
    assert_eq!(default.len(), 10);
    assert!(default.values().all(|q| q.is_longitudinal()));
}

// Demographic questions with 3+ years (job_title, research_area, ...) must
// not leak into the core trend set.
#[test]
fn core_trend_questions_come_from_core_only() {
    let catalogue = QuestionCatalogue::new();
    let trend = catalogue.get_core_trend_questions();

    for (id, question) in &trend {
        assert!(catalogue.core_questions().contains_key(*id));
        assert!(question.year_count() >= 3);
    }
    for excluded in ["job_title", "research_area", "publication_history", "organization_type"] {
        let question = catalogue.question(excluded).expect("demographic question");
        assert!(question.year_count() >= 3);
        assert!(!trend.contains_key(&QuestionId::from(excluded)));
    }
    for excluded in ["credit_for_sharing", "fair_principles_awareness", "data_sharing_frequency"] {
        assert!(!trend.contains_key(&QuestionId::from(excluded)));
    }
    assert_eq!(trend.len(), 4);
}

#[test]
fn harmonize_identity_fallbacks() {
    let agreement = ResponseScale::Agreement5.options();
    let frequency = ResponseScale::Frequency4.options();

    let strongly = harmonize_response_scale("Strongly agree", agreement, frequency);
    assert_eq!(strongly, "Strongly agree");
    assert!(!frequency.contains(&strongly.as_str()));

    assert_eq!(
        harmonize_response_scale("Unknown", agreement, frequency),
        "Unknown"
    );
    assert_eq!(
        harmonize_response_scale("Somewhat agree", agreement, frequency),
        "Frequently"
    );
}

#[test]
fn harmonized_column_mapping_projects_every_question() {
    let mapping = create_harmonized_column_mapping();
    assert_eq!(
        mapping.get("open_access_attitude"),
        Some(&BTreeMap::from([
            (2021, "Q2.7_1".to_string()),
            (2022, "Q2.11_1".to_string()),
            (2023, "Q2.10.a".to_string()),
            (2024, "Q12_1".to_string()),
        ]))
    );
    assert_eq!(
        mapping.get("data_sharing_motivations"),
        Some(&BTreeMap::from([(2017, "Q2.3_*".to_string())]))
    );

    let catalogue = QuestionCatalogue::new();
    let all = catalogue.get_all_questions();
    assert_eq!(mapping.len(), all.len());
    for (id, question) in all {
        assert_eq!(mapping.get(&id.0), Some(&question.column_mappings));
    }
}

#[test]
fn harmonized_column_mapping_written_as_json() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write_harmonized_column_mapping(&mut file)?;

    let data = fs::read_to_string(file.path()).context("reading written mapping")?;
    let value: Value = serde_json::from_str(&data)?;
    assert_eq!(
        value.pointer("/open_data_attitude/2023").and_then(Value::as_str),
        Some("Q2.10.b")
    );
    assert_eq!(
        value.pointer("/job_title/2017").and_then(Value::as_str),
        Some("Q10.5")
    );
    assert_eq!(value.as_object().map(|m| m.len()), Some(18));
    Ok(())
}

// Repeated queries over one catalogue, and queries over independently built
// catalogues, must agree structurally.
#[test]
fn queries_are_idempotent() {
    let catalogue = QuestionCatalogue::shared();
    let fresh = QuestionCatalogue::new();

    assert_eq!(catalogue.get_all_questions(), catalogue.get_all_questions());
    assert_eq!(catalogue.get_all_questions(), fresh.get_all_questions());
    for year in OBSERVED_YEARS {
        assert_eq!(
            catalogue.get_questions_by_year(year),
            catalogue.get_questions_by_year(year)
        );
    }
    assert_eq!(
        catalogue.get_longitudinal_questions(2),
        fresh.get_longitudinal_questions(2)
    );
    assert_eq!(
        catalogue.get_core_trend_questions(),
        catalogue.get_core_trend_questions()
    );
    assert_eq!(
        create_harmonized_column_mapping(),
        create_harmonized_column_mapping()
    );
}

#[test]
fn shared_catalogue_readable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| QuestionCatalogue::shared().get_all_questions().len()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), 18);
    }
}

#[test]
fn survey_years_cover_observed_waves() {
    let years = QuestionCatalogue::new().survey_years();
    assert_eq!(years, BTreeSet::from(OBSERVED_YEARS));
}

#[test]
fn wildcard_columns_match_fanned_out_exports() {
    let catalogue = QuestionCatalogue::new();
    let ownership = catalogue
        .question("data_ownership_before_pub")
        .expect("historical question");
    assert!(ownership.column_matches(2017, "Q2.6_3"));
    assert!(!ownership.column_matches(2017, "Q2.7_3"));
    assert!(!ownership.column_matches(2019, "Q2.6_3"));

    let attitude = catalogue
        .question("open_access_attitude")
        .expect("core question");
    assert!(attitude.column_matches(2024, "Q12_1"));
    assert!(!attitude.column_matches(2024, "Q12_10"));
}
