//! ---
//! ops_section: "08-shift-models-interpolation"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Timeline data model and interpolation routines."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
//! Metric timelines for the W-OPS dashboard.
//!
//! A timeline is an ordered series of [`TimelineSample`]s mixing observed
//! (`actual`) and forecast (`predicted`) values, optionally with confidence
//! bounds for chart bands. Series are validated at construction; queries
//! against a validated series are total and pure.

pub mod errors;
pub mod horizon;
mod interpolate;
pub mod sample;

pub use errors::{Result, TimelineError};
pub use horizon::{MetricTimelines, TimelineHorizon};
pub use sample::{TimelineSample, TimelineSeries};
