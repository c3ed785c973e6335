//! ---
//! ops_section: "01-core-functionality"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Shared primitives and utilities for the core runtime."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
//! Core shared primitives for the W-OPS dashboard workspace.
//! This crate exposes configuration loading, logging bootstrap, and the
//! wall-clock time primitives consumed across the workspace.

pub mod config;
pub mod logging;
pub mod time;

pub use config::{
    AppConfig, BaselineConfig, LoadedAppConfig, LoggingConfig, MetricConfig, SimulationConfig,
    ViewConfig,
};
pub use logging::{init_tracing, LogFormat};
pub use time::{OperatingWindow, TimeError, TimeOfDay};
