//! ---
//! ops_section: "03-persistence-logging"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Structured logging adapters and sinks."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Structured logging conventions for the W-OPS dashboard core.
//!
//! Events carry the view/metric pair they relate to plus the store revision
//! that triggered them, so a session log can be replayed against the exact
//! sequence of scrubber and scenario mutations.

use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

pub mod macros;

/// Initialize a baseline tracing subscriber suitable for development.
pub fn init() {
    let _ = Registry::default()
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(subscriber_fmt::layer())
        .try_init();
}

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Dashboard view the log event relates to.
    pub view: Option<&'a str>,
    /// Metric identifier the log event relates to.
    pub metric: Option<&'a str>,
    /// Store revision current when the event was emitted.
    pub revision: Option<u64>,
    /// Display mode (live, scenario, draft-plan).
    pub mode: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a view identifier.
    pub fn with_view(mut self, view: &'a str) -> Self {
        self.view = Some(view);
        self
    }

    /// Attach a metric identifier.
    pub fn with_metric(mut self, metric: &'a str) -> Self {
        self.metric = Some(metric);
        self
    }

    /// Attach the store revision.
    pub fn with_revision(mut self, revision: u64) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Attach a display mode descriptor.
    pub fn with_mode(mut self, mode: &'a str) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// High-level outcome used when emitting lifecycle log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventOutcome {
    /// The operation completed successfully.
    Success,
    /// The operation failed or was aborted.
    Fault,
}

impl SystemEventOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            SystemEventOutcome::Success => "success",
            SystemEventOutcome::Fault => "fault",
        }
    }

    fn level(&self) -> Level {
        match self {
            SystemEventOutcome::Success => Level::INFO,
            SystemEventOutcome::Fault => Level::ERROR,
        }
    }
}

/// Emit a standardized system event with a success/fault outcome.
pub fn log_system_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: SystemEventOutcome,
) {
    let fallback = LogContext::default();
    let ctx = context.unwrap_or(&fallback);
    match outcome.level() {
        Level::ERROR => tracing::event!(
            Level::ERROR,
            event,
            outcome = outcome.as_str(),
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %message
        ),
        Level::WARN => tracing::event!(
            Level::WARN,
            event,
            outcome = outcome.as_str(),
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %message
        ),
        Level::INFO => tracing::event!(
            Level::INFO,
            event,
            outcome = outcome.as_str(),
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %message
        ),
        Level::DEBUG => tracing::event!(
            Level::DEBUG,
            event,
            outcome = outcome.as_str(),
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %message
        ),
        Level::TRACE => tracing::event!(
            Level::TRACE,
            event,
            outcome = outcome.as_str(),
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %message
        ),
    }
}
