//! ---
//! ops_section: "01-core-functionality"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Shared contextual-time state for dashboard views."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;
use w_ops_common::config::AppConfig;
use w_ops_common::TimeOfDay;
use w_ops_logging::{ops_debug, ops_info, ops_warn, LogContext};
use w_ops_scenario::{Scenario, ScenarioCatalog, ScenarioSource};
use w_ops_timeline::{TimelineHorizon, TimelineSeries};

use crate::errors::{ContextError, Result};

/// The contextual-time and scenario selection state every view reads.
///
/// Created once at application start with defaults, mutated only through the
/// store's setters, gone when the application exits. Nothing here is
/// persisted: a reload returns to the configured baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeContextState {
    /// Fixed reference "current" time; a configured baseline, not the
    /// machine clock.
    pub now_time: TimeOfDay,
    /// Scrubber position. Defaults to `now_time`.
    pub contextual_time: TimeOfDay,
    pub scenario_mode: bool,
    pub active_scenario_id: Option<String>,
    pub scenario_source: Option<ScenarioSource>,
    pub draft_plan_scenario: Option<Scenario>,
    /// Whether downstream timelines should use their end-of-day variant.
    pub use_eod: bool,
}

impl TimeContextState {
    fn live(now_time: TimeOfDay) -> Self {
        Self {
            now_time,
            contextual_time: now_time,
            scenario_mode: false,
            active_scenario_id: None,
            scenario_source: None,
            draft_plan_scenario: None,
            use_eod: false,
        }
    }

    /// Whether the scrubber has left the baseline.
    pub fn is_contextual_different(&self) -> bool {
        self.contextual_time != self.now_time
    }

    /// Whether the scrubber points into the past.
    pub fn is_contextual_past(&self) -> bool {
        self.contextual_time < self.now_time
    }

    /// Horizon selection derived from `use_eod`.
    pub fn horizon(&self) -> TimelineHorizon {
        if self.use_eod {
            TimelineHorizon::EndOfDay
        } else {
            TimelineHorizon::EndOfShift
        }
    }

    fn mode_label(&self) -> &'static str {
        match self.scenario_source {
            None => "live",
            Some(ScenarioSource::Manual) => "scenario",
            Some(ScenarioSource::DraftPlan) => "draft-plan",
        }
    }
}

/// Process-wide store behind which all views share one [`TimeContextState`].
///
/// Views hold the store behind an `Arc` and poll [`TimeContextStore::revision`]
/// from the render loop; every effective mutation bumps it. The catalog is
/// injected at construction and immutable for the life of the store, so
/// scenario lookups need no lock.
#[derive(Debug)]
pub struct TimeContextStore {
    state: RwLock<TimeContextState>,
    catalog: ScenarioCatalog,
    revision: AtomicU64,
}

impl TimeContextStore {
    pub fn new(now_time: TimeOfDay, catalog: ScenarioCatalog) -> Self {
        Self {
            state: RwLock::new(TimeContextState::live(now_time)),
            catalog,
            revision: AtomicU64::new(0),
        }
    }

    /// Construct from configuration, seeding the baseline "now".
    pub fn from_config(config: &AppConfig, catalog: ScenarioCatalog) -> Self {
        Self::new(config.baseline.now_time, catalog)
    }

    /// Monotonic change counter; bumped by every effective mutation.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    fn bump(&self) -> u64 {
        self.revision.fetch_add(1, Ordering::Release) + 1
    }

    /// Move the scrubber. Accepts any wall-clock value: the scrubber layer
    /// clamps to the operating window and snaps to the scrub step before
    /// calling, and this store deliberately re-checks nothing.
    pub fn set_contextual_time(&self, t: TimeOfDay) {
        let mode = {
            let mut state = self.state.write();
            state.contextual_time = t;
            state.mode_label()
        };
        let revision = self.bump();
        ops_debug!(
            context = LogContext::new().with_revision(revision).with_mode(mode),
            "contextual time set to {t}"
        );
    }

    /// Return the scrubber to the baseline. Idempotent.
    pub fn reset_to_now(&self) {
        let (now, mode) = {
            let mut state = self.state.write();
            state.contextual_time = state.now_time;
            (state.now_time, state.mode_label())
        };
        let revision = self.bump();
        ops_debug!(
            context = LogContext::new().with_revision(revision).with_mode(mode),
            "contextual time reset to {now}"
        );
    }

    /// Activate a catalog scenario. Unknown ids fail without touching state.
    pub fn enable_scenario(&self, id: &str) -> Result<()> {
        if !self.catalog.contains(id) {
            ops_warn!(
                context = LogContext::new().with_revision(self.revision()),
                "scenario '{id}' not found in the catalog"
            );
            return Err(ContextError::ScenarioNotFound(id.to_owned()));
        }
        {
            let mut state = self.state.write();
            state.scenario_mode = true;
            state.active_scenario_id = Some(id.to_owned());
            state.scenario_source = Some(ScenarioSource::Manual);
        }
        let revision = self.bump();
        ops_info!(
            context = LogContext::new().with_revision(revision).with_mode("scenario"),
            "scenario '{id}' enabled"
        );
        Ok(())
    }

    /// Leave manual scenario mode. An injected draft plan is untouched.
    pub fn disable_scenario(&self) {
        {
            let mut state = self.state.write();
            state.scenario_mode = false;
            state.active_scenario_id = None;
            state.scenario_source = None;
        }
        let revision = self.bump();
        ops_info!(
            context = LogContext::new().with_revision(revision).with_mode("live"),
            "scenario mode disabled"
        );
    }

    /// Overlay an externally evaluated draft plan.
    pub fn enter_draft_plan(&self, scenario: Scenario) {
        let id = scenario.id.clone();
        {
            let mut state = self.state.write();
            state.scenario_mode = true;
            state.active_scenario_id = Some(scenario.id.clone());
            state.scenario_source = Some(ScenarioSource::DraftPlan);
            state.draft_plan_scenario = Some(scenario);
        }
        let revision = self.bump();
        ops_info!(
            context = LogContext::new().with_revision(revision).with_mode("draft-plan"),
            "draft plan '{id}' entered"
        );
    }

    /// Drop the injected draft plan and, when it was the active source,
    /// return to live mode. A manually selected scenario stays active.
    /// No-op when no draft plan is present.
    pub fn exit_draft_plan(&self) {
        let mode = {
            let mut state = self.state.write();
            if state.draft_plan_scenario.is_none()
                && state.scenario_source != Some(ScenarioSource::DraftPlan)
            {
                return;
            }
            if state.scenario_source == Some(ScenarioSource::DraftPlan) {
                state.scenario_mode = false;
                state.active_scenario_id = None;
                state.scenario_source = None;
            }
            state.draft_plan_scenario = None;
            state.mode_label()
        };
        let revision = self.bump();
        ops_info!(
            context = LogContext::new().with_revision(revision).with_mode(mode),
            "draft plan exited"
        );
    }

    /// Select between end-of-shift and end-of-day timeline variants.
    pub fn set_use_eod(&self, use_eod: bool) {
        self.state.write().use_eod = use_eod;
        let revision = self.bump();
        ops_debug!(
            context = LogContext::new().with_revision(revision),
            "eod horizon {}",
            if use_eod { "enabled" } else { "disabled" }
        );
    }

    /// Cloned copy of the full state, for snapshotting and diagnostics.
    pub fn snapshot(&self) -> TimeContextState {
        self.state.read().clone()
    }

    pub fn now_time(&self) -> TimeOfDay {
        self.state.read().now_time
    }

    pub fn contextual_time(&self) -> TimeOfDay {
        self.state.read().contextual_time
    }

    pub fn is_contextual_different(&self) -> bool {
        self.state.read().is_contextual_different()
    }

    pub fn is_contextual_past(&self) -> bool {
        self.state.read().is_contextual_past()
    }

    pub fn use_eod(&self) -> bool {
        self.state.read().use_eod
    }

    pub fn horizon(&self) -> TimelineHorizon {
        self.state.read().horizon()
    }

    pub fn scenario_mode(&self) -> bool {
        self.state.read().scenario_mode
    }

    /// The scenario currently substituting live data, if any: the injected
    /// draft plan when that is the active source, otherwise the catalog
    /// record behind the active id.
    pub fn active_scenario(&self) -> Option<Scenario> {
        let state = self.state.read();
        match state.scenario_source {
            Some(ScenarioSource::DraftPlan) => state.draft_plan_scenario.clone(),
            Some(ScenarioSource::Manual) => state
                .active_scenario_id
                .as_deref()
                .and_then(|id| self.catalog.get(id))
                .cloned(),
            None => None,
        }
    }

    /// Catalog scenarios in menu order.
    pub fn available_scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.catalog.iter()
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    /// Interpolation convenience: nearly every consumer reaches the
    /// interpolator through the context, so the store re-exposes it.
    pub fn interpolate_value(&self, series: &TimelineSeries, at: TimeOfDay) -> Option<f64> {
        series.value_at(at)
    }

    /// Interpolate a series at the current contextual time.
    pub fn value_at_context(&self, series: &TimelineSeries) -> Option<f64> {
        series.value_at(self.contextual_time())
    }
}
