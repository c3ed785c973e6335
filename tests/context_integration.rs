//! ---
//! ops_section: "15-testing-qa-runbook"
//! ops_subsection: "integration-tests"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Integration and validation tests for the W-OPS stack."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use indexmap::IndexMap;
use w_ops_common::TimeOfDay;
use w_ops_context::{ContextError, TimeContextStore};
use w_ops_scenario::{
    AlertImpact, HealthImpact, ImpactSet, Scenario, ScenarioCatalog, DEFAULT_PERSISTING_ALERTS,
};
use w_ops_timeline::{TimelineSample, TimelineSeries};

fn t(raw: &str) -> TimeOfDay {
    raw.parse().unwrap()
}

fn scenario(id: &str, alert_impact: Option<AlertImpact>) -> Scenario {
    Scenario {
        id: id.to_owned(),
        name: id.to_owned(),
        description: None,
        alert_impact,
        impacts: Some(ImpactSet {
            health: Some(HealthImpact { delta: 3.0 }),
        }),
        overlays: IndexMap::new(),
    }
}

#[test]
fn scrub_forward_and_read_the_forecast() {
    // The flow a view runs on every scrubber release: update the shared
    // context, re-derive the flags, and re-query each rendered timeline.
    let catalog = ScenarioCatalog::from_scenarios(vec![scenario("surge-staffing", None)]).unwrap();
    let store = TimeContextStore::new(t("10:00"), catalog);
    assert_eq!(store.contextual_time(), t("10:00"));

    store.set_contextual_time(t("12:00"));
    assert!(store.is_contextual_different());
    assert!(!store.is_contextual_past());

    let series = TimelineSeries::new(vec![
        TimelineSample {
            predicted: Some(83.0),
            now: true,
            ..TimelineSample::actual(t("10:00"), 83.0)
        },
        TimelineSample::predicted(t("12:00"), 91.0),
    ])
    .unwrap();
    assert_eq!(store.value_at_context(&series), Some(91.0));

    store.reset_to_now();
    assert!(!store.is_contextual_different());
    assert_eq!(store.value_at_context(&series), Some(83.0));
}

#[test]
fn scrub_backward_classifies_as_past() {
    let store = TimeContextStore::new(t("10:00"), ScenarioCatalog::new());
    store.set_contextual_time(t("07:15"));
    assert!(store.is_contextual_different());
    assert!(store.is_contextual_past());
}

#[test]
fn scenario_selection_flow() {
    let catalog = ScenarioCatalog::from_scenarios(vec![
        scenario(
            "surge-staffing",
            Some(AlertImpact {
                mitigated: vec!["late-wave".into(), "dock-backlog".into()],
                persists: vec!["cold-zone".into()],
                new_alerts: vec![],
            }),
        ),
        scenario("belt-outage", None),
    ])
    .unwrap();
    let store = TimeContextStore::new(t("10:00"), catalog);

    // Selector menus summarize impacts before anything is activated.
    let summaries: Vec<_> = store
        .available_scenarios()
        .map(|s| (s.id.clone(), s.impact_summary()))
        .collect();
    assert_eq!(summaries[0].1.mitigated, 2);
    assert_eq!(summaries[0].1.persists, 1);
    assert_eq!(summaries[1].1.persists, DEFAULT_PERSISTING_ALERTS);
    assert_eq!(summaries[1].1.health_delta, 3.0);

    assert_eq!(
        store.enable_scenario("typo").unwrap_err(),
        ContextError::ScenarioNotFound("typo".to_owned())
    );

    store.enable_scenario("surge-staffing").unwrap();
    assert_eq!(store.active_scenario().unwrap().id, "surge-staffing");

    // Exiting a draft plan that was never entered is a no-op: the manual
    // pick stays active.
    store.exit_draft_plan();
    assert!(store.scenario_mode());
    assert_eq!(store.active_scenario().unwrap().id, "surge-staffing");

    // An injected draft plan takes over the active slot; leaving it
    // returns the dashboard to live mode.
    store.enter_draft_plan(scenario("reroute-draft", None));
    assert_eq!(store.active_scenario().unwrap().id, "reroute-draft");
    store.exit_draft_plan();
    assert!(!store.scenario_mode());
    assert!(store.active_scenario().is_none());
}

#[test]
fn compound_gesture_scenario_plus_reset() {
    // Callers batch their own gestures; the store just applies both writes.
    let catalog = ScenarioCatalog::from_scenarios(vec![scenario("belt-outage", None)]).unwrap();
    let store = TimeContextStore::new(t("10:00"), catalog);

    store.set_contextual_time(t("13:45"));
    store.enable_scenario("belt-outage").unwrap();
    store.reset_to_now();

    assert!(store.scenario_mode());
    assert!(!store.is_contextual_different());
    assert_eq!(store.contextual_time(), t("10:00"));
}
