//! ---
//! ops_section: "08-shift-models-interpolation"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Scenario records and impact models."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
//! What-if scenarios for the W-OPS dashboard.
//!
//! A scenario is an alternate dataset (plus alert/health impact metadata)
//! the operator can overlay on the live timelines. This crate owns the
//! record shapes, the id-keyed catalog, and the impact summarization used
//! by selector menus.

pub mod catalog;
pub mod errors;
mod impact;
pub mod model;

pub use catalog::ScenarioCatalog;
pub use errors::{Result, ScenarioError};
pub use impact::{ScenarioImpactSummary, DEFAULT_PERSISTING_ALERTS};
pub use model::{AlertImpact, HealthImpact, ImpactSet, Scenario, ScenarioSource};
