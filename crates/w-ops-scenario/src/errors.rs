//! ---
//! ops_section: "08-shift-models-interpolation"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Scenario records and impact models."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScenarioError>;

#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("scenario '{0}' is already registered")]
    DuplicateId(String),
}
