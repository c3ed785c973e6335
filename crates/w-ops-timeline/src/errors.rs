//! ---
//! ops_section: "08-shift-models-interpolation"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Timeline data model and interpolation routines."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimelineError>;

/// Boundary validation failures for caller-supplied sample sequences.
#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("sample {index} does not advance the series clock")]
    NonMonotonic { index: usize },
    #[error("sample {index} carries a non-finite {field} value")]
    NonFinite { index: usize, field: &'static str },
}
