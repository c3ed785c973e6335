//! ---
//! ops_section: "08-shift-models-interpolation"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Scenario records and impact models."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::model::Scenario;

/// Persisting-alert count reported for scenarios that ship without alert
/// impact data.
// TODO: confirm this figure with product; it is a stand-in for data the
// scenario author did not supply, not a computed value.
pub const DEFAULT_PERSISTING_ALERTS: usize = 5;

/// Condensed impact figures shown in scenario selector menus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioImpactSummary {
    pub mitigated: usize,
    pub persists: usize,
    pub new_alerts: usize,
    pub health_delta: f64,
}

impl Scenario {
    /// Reduce the raw impact fields into the selector-menu summary.
    pub fn impact_summary(&self) -> ScenarioImpactSummary {
        let health_delta = self
            .impacts
            .as_ref()
            .and_then(|impacts| impacts.health.as_ref())
            .map(|health| health.delta)
            .unwrap_or(0.0);

        match &self.alert_impact {
            Some(impact) => ScenarioImpactSummary {
                mitigated: impact.mitigated.len(),
                persists: impact.persists.len(),
                new_alerts: impact.new_alerts.len(),
                health_delta,
            },
            None => ScenarioImpactSummary {
                mitigated: 0,
                persists: DEFAULT_PERSISTING_ALERTS,
                new_alerts: 0,
                health_delta,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AlertImpact, HealthImpact, ImpactSet};
    use indexmap::IndexMap;

    fn scenario(alert_impact: Option<AlertImpact>, impacts: Option<ImpactSet>) -> Scenario {
        Scenario {
            id: "test".to_owned(),
            name: "Test".to_owned(),
            description: None,
            alert_impact,
            impacts,
            overlays: IndexMap::new(),
        }
    }

    #[test]
    fn counts_alert_arrays() {
        let summary = scenario(
            Some(AlertImpact {
                mitigated: vec!["a1".into(), "a2".into(), "a3".into()],
                persists: vec!["a4".into()],
                new_alerts: vec!["a5".into(), "a6".into()],
            }),
            Some(ImpactSet {
                health: Some(HealthImpact { delta: 4.5 }),
            }),
        )
        .impact_summary();
        assert_eq!(summary.mitigated, 3);
        assert_eq!(summary.persists, 1);
        assert_eq!(summary.new_alerts, 2);
        assert_eq!(summary.health_delta, 4.5);
    }

    #[test]
    fn falls_back_when_alert_impact_is_absent() {
        let summary = scenario(
            None,
            Some(ImpactSet {
                health: Some(HealthImpact { delta: -2.0 }),
            }),
        )
        .impact_summary();
        assert_eq!(summary.mitigated, 0);
        assert_eq!(summary.persists, DEFAULT_PERSISTING_ALERTS);
        assert_eq!(summary.new_alerts, 0);
        assert_eq!(summary.health_delta, -2.0);
    }

    #[test]
    fn missing_health_delta_reads_as_zero() {
        let summary = scenario(None, None).impact_summary();
        assert_eq!(summary.health_delta, 0.0);
        assert_eq!(summary.persists, DEFAULT_PERSISTING_ALERTS);

        let summary = scenario(None, Some(ImpactSet { health: None })).impact_summary();
        assert_eq!(summary.health_delta, 0.0);
    }
}
