//! ---
//! ops_section: "08-shift-models-interpolation"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Scenario records and impact models."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use w_ops_timeline::TimelineSeries;

/// An alternate "what-if" dataset selectable from the dashboard.
///
/// `overlays` maps metric ids to the series substituted for the live
/// timeline while the scenario is active; metrics without an overlay keep
/// rendering live data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alert_impact: Option<AlertImpact>,
    #[serde(default)]
    pub impacts: Option<ImpactSet>,
    #[serde(default)]
    pub overlays: IndexMap<String, TimelineSeries>,
}

impl Scenario {
    /// Overlay series for one metric, if the scenario carries one.
    pub fn overlay(&self, metric_id: &str) -> Option<&TimelineSeries> {
        self.overlays.get(metric_id)
    }
}

/// Alert ids a scenario mitigates, leaves in place, or introduces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertImpact {
    #[serde(default)]
    pub mitigated: Vec<String>,
    #[serde(default)]
    pub persists: Vec<String>,
    #[serde(default)]
    pub new_alerts: Vec<String>,
}

/// Aggregate impact figures attached to a scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactSet {
    #[serde(default)]
    pub health: Option<HealthImpact>,
}

/// Facility health delta projected by a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthImpact {
    pub delta: f64,
}

/// How the active scenario was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioSource {
    /// Picked from the catalog by the operator.
    Manual,
    /// Injected by an external plan-evaluation flow.
    DraftPlan,
}
