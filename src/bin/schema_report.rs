//! Prints a short report over the question catalogue.
//!
//! Default output lists the core trend questions with their years, how many
//! questions each selected year carries, and how many questions span the
//! longitudinal threshold. `--json` dumps the harmonized column mapping
//! instead; `--validate` checks the literal catalogue and exits non-zero on
//! any problem.

use anyhow::{Context, Result, bail};
use std::env;
use std::io::{self, Write};
use survey_schema::{
    DEFAULT_LONGITUDINAL_MIN_YEARS, QuestionCatalogue, SurveyYear, parse_year_list,
    validate_against_schema, validate_catalogue, write_harmonized_column_mapping,
};

const DEFAULT_REPORT_YEAR: SurveyYear = 2024;
const YEAR_ENV: &str = "SURVEY_SCHEMA_REPORT_YEAR";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

enum Mode {
    Report,
    Json,
    Validate,
}

struct Options {
    mode: Mode,
    years: Vec<SurveyYear>,
    min_years: i64,
}

fn run() -> Result<()> {
    let options = parse_args()?;
    let catalogue = QuestionCatalogue::shared();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match options.mode {
        Mode::Json => write_harmonized_column_mapping(&mut out)?,
        Mode::Validate => validate(catalogue, &mut out)?,
        Mode::Report => report(catalogue, &options, &mut out)?,
    }
    Ok(())
}

fn report(catalogue: &QuestionCatalogue, options: &Options, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Core trend questions (3+ years):")?;
    for (id, question) in catalogue.get_core_trend_questions() {
        let years = question
            .years_available
            .iter()
            .map(SurveyYear::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "  {}: {} years ({years})", id.0, question.year_count())?;
    }

    for year in &options.years {
        let count = catalogue.get_questions_by_year(*year).len();
        writeln!(out, "\n{year} questions available: {count}")?;
    }

    let longitudinal = catalogue.get_longitudinal_questions(options.min_years);
    writeln!(
        out,
        "\nLongitudinal questions ({}+ years): {}",
        options.min_years,
        longitudinal.len()
    )?;
    Ok(())
}

fn validate(catalogue: &QuestionCatalogue, out: &mut impl Write) -> Result<()> {
    let mut problems = validate_catalogue(catalogue);
    let document = catalogue.to_json()?;
    if let Err(err) = validate_against_schema(&document) {
        problems.push(format!("{err:#}"));
    }
    if !problems.is_empty() {
        bail!(
            "question catalogue has {} problem(s):\n{}",
            problems.len(),
            problems.join("\n")
        );
    }
    writeln!(
        out,
        "question catalogue ok: {} questions across {} survey years",
        catalogue.get_all_questions().len(),
        catalogue.survey_years().len()
    )?;
    Ok(())
}

fn parse_args() -> Result<Options> {
    let mut mode = Mode::Report;
    let mut years = None;
    let mut min_years = DEFAULT_LONGITUDINAL_MIN_YEARS;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => usage_and_exit(0),
            "--json" => mode = Mode::Json,
            "--validate" => mode = Mode::Validate,
            "--year" => {
                let value = args.next().unwrap_or_else(|| usage_and_exit(2));
                years = Some(parse_year_list(&value)?);
            }
            "--min-years" => {
                let value = args.next().unwrap_or_else(|| usage_and_exit(2));
                min_years = value
                    .parse()
                    .with_context(|| format!("invalid --min-years value '{value}'"))?;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                usage_and_exit(2);
            }
        }
    }

    let years = match years {
        Some(years) => years,
        None => match env_non_empty(YEAR_ENV) {
            Some(value) => {
                parse_year_list(&value).with_context(|| format!("reading {YEAR_ENV}"))?
            }
            None => vec![DEFAULT_REPORT_YEAR],
        },
    };

    Ok(Options {
        mode,
        years,
        min_years,
    })
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage: schema-report [--year YEAR[,YEAR...]] [--min-years N] [--json | --validate]"
    );
    std::process::exit(code);
}
