//! ---
//! ops_section: "01-core-functionality"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Shared contextual-time state for dashboard views."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContextError>;

#[derive(Debug, Error, PartialEq)]
pub enum ContextError {
    #[error("scenario '{0}' not found in the catalog")]
    ScenarioNotFound(String),
}
