//! ---
//! ops_section: "03-persistence-logging"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Structured logging adapters and sinks."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
/// Emit an informational log enriched with W-OPS context.
#[macro_export]
macro_rules! ops_info {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        tracing::event!(
            tracing::Level::INFO,
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        let ctx = &$crate::LogContext::default();
        tracing::event!(
            tracing::Level::INFO,
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit a debug log enriched with W-OPS context.
#[macro_export]
macro_rules! ops_debug {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        tracing::event!(
            tracing::Level::DEBUG,
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        let ctx = &$crate::LogContext::default();
        tracing::event!(
            tracing::Level::DEBUG,
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit a warning log enriched with W-OPS context.
#[macro_export]
macro_rules! ops_warn {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        tracing::event!(
            tracing::Level::WARN,
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        let ctx = &$crate::LogContext::default();
        tracing::event!(
            tracing::Level::WARN,
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an error log enriched with W-OPS context.
#[macro_export]
macro_rules! ops_error {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        tracing::event!(
            tracing::Level::ERROR,
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        let ctx = &$crate::LogContext::default();
        tracing::event!(
            tracing::Level::ERROR,
            view = ctx.view.unwrap_or(""),
            metric = ctx.metric.unwrap_or(""),
            revision = ctx.revision.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}
