//! Question catalogue wiring.
//!
//! The catalogue is compiled into the crate: `definitions` holds the literal
//! tables, `index::QuestionCatalogue` answers the read-only queries, and
//! `validation` checks the literal data for entry mistakes. Types here mirror
//! the exported JSON document described by `schema/question_catalogue.schema.json`.

pub mod definitions;
pub mod identity;
pub mod index;
pub mod model;
pub mod scale;
pub mod validation;

pub use definitions::QuestionTable;
pub use identity::{QuestionCategory, QuestionId, QuestionType, SurveyYear};
pub use index::{
    CORE_TREND_MIN_YEARS, DEFAULT_LONGITUDINAL_MIN_YEARS, QuestionCatalogue, QuestionMap,
};
pub use model::{COLUMN_FAMILY_SUFFIX, QuestionMapping};
pub use scale::ResponseScale;
pub use validation::{CATALOGUE_SCHEMA, validate_against_schema, validate_catalogue};
