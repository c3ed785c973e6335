//! ---
//! ops_section: "01-core-functionality"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Shared contextual-time state for dashboard views."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
//! The time context store: one shared record of "when is the dashboard
//! looking" and "which dataset is it looking at".
//!
//! Views receive the store behind an `Arc` at composition time (never via an
//! ambient singleton) and read the contextual time, scenario selection, and
//! horizon flags from it before querying their timelines. All mutation goes
//! through the store's setters; a revision counter tells render loops when
//! to refresh.

pub mod errors;
pub mod store;

pub use errors::{ContextError, Result};
pub use store::{TimeContextState, TimeContextStore};
