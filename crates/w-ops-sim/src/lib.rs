//! ---
//! ops_section: "11-simulation-test-harness"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Simulation runtime helpers and mock data engines."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
//! Mock data layer for the W-OPS dashboard.
//!
//! There is no backend: every timeline and scenario the views render comes
//! from this crate, either generated deterministically from configuration or
//! loaded from JSON/CSV fixture files.

pub mod dataset;
pub mod generator;
pub mod loader;

pub use dataset::{catalog_from_config, MockDataset};
pub use generator::SeriesGenerator;
pub use loader::{load_catalog, load_scenarios, load_series};
