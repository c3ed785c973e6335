//! ---
//! ops_section: "15-testing-qa-runbook"
//! ops_subsection: "integration-tests"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Integration and validation tests for the W-OPS stack."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use std::fs;
use std::io::Write;

use w_ops_common::config::AppConfig;
use w_ops_context::TimeContextStore;
use w_ops_sim::{catalog_from_config, MockDataset};
use w_ops_timeline::TimelineHorizon;

const CONFIG_TEMPLATE: &str = r#"
    [baseline]
    now_time = "10:00"
    window_start = "06:00"
    window_end = "22:00"
    shift_end = "14:00"

    [views.staff.metrics.headcount]
    label = "Active headcount"
    unit = "people"
    baseline = 42.0
    swing = 11.0

    [views.zones.metrics.throughput]
    label = "Units per hour"
    unit = "u/h"
    baseline = 820.0
    swing = 240.0
    eod_horizon = true

    [simulation]
    random_seed = 31
    noise_sigma = 1.5
"#;

const SCENARIOS_JSON: &str = r#"[
    {
        "id": "belt-outage",
        "name": "Belt 3 outage",
        "description": "Conveyor belt 3 offline from 10:30",
        "alert_impact": {
            "mitigated": [],
            "persists": ["dock-backlog"],
            "new_alerts": ["belt-3-down"]
        },
        "impacts": {"health": {"delta": -6.0}},
        "overlays": {
            "throughput": [
                {"time": "10:00", "predicted": 820.0},
                {"time": "14:00", "predicted": 540.0}
            ]
        }
    }
]"#;

#[test]
fn config_to_store_to_rendered_value() {
    let dir = tempfile::tempdir().unwrap();
    let scenario_path = dir.path().join("scenarios.json");
    let mut file = fs::File::create(&scenario_path).unwrap();
    write!(file, "{SCENARIOS_JSON}").unwrap();
    drop(file);

    let config_path = dir.path().join("w-ops.toml");
    fs::write(
        &config_path,
        format!(
            "{CONFIG_TEMPLATE}\nscenario_files = [\"{}\"]\n",
            scenario_path.display()
        ),
    )
    .unwrap();

    let config = AppConfig::load(&[&config_path]).unwrap();
    let dataset = MockDataset::build(&config).unwrap();
    let catalog = catalog_from_config(&config).unwrap();
    let store = TimeContextStore::from_config(&config, catalog);

    // Every configured metric resolves a value at the baseline instant.
    for view_id in ["staff", "zones"] {
        for (metric_id, timelines) in dataset.view(view_id).unwrap() {
            let series = timelines.series_for(store.horizon());
            assert!(
                store.value_at_context(series).is_some(),
                "no contextual value for {view_id}/{metric_id}"
            );
        }
    }

    // Scrub to mid-afternoon and overlay the outage scenario.
    store.set_contextual_time(t("12:00"));
    store.enable_scenario("belt-outage").unwrap();
    let active = store.active_scenario().unwrap();
    assert_eq!(active.impact_summary().new_alerts, 1);
    assert_eq!(active.impact_summary().health_delta, -6.0);

    let overlay = active.overlay("throughput").unwrap();
    assert_eq!(store.value_at_context(overlay), Some(680.0));

    // Metrics without an overlay fall back to the live series.
    assert!(active.overlay("headcount").is_none());
    let live = dataset.timelines("staff", "headcount").unwrap();
    assert!(store
        .value_at_context(live.series_for(store.horizon()))
        .is_some());
}

#[test]
fn eod_toggle_extends_the_visible_horizon() {
    let config: AppConfig = CONFIG_TEMPLATE.parse().unwrap();
    let dataset = MockDataset::build(&config).unwrap();
    let store = TimeContextStore::from_config(&config, Default::default());

    let throughput = dataset.timelines("zones", "throughput").unwrap();
    store.set_contextual_time(t("18:00"));

    // End-of-shift data stops at 14:00, so 18:00 has no answer.
    assert_eq!(
        store.value_at_context(throughput.series_for(TimelineHorizon::EndOfShift)),
        None
    );

    store.set_use_eod(true);
    assert_eq!(store.horizon(), TimelineHorizon::EndOfDay);
    assert!(store
        .value_at_context(throughput.series_for(store.horizon()))
        .is_some());

    // Headcount has no extended variant; the horizon toggle must not
    // open a hole for it.
    let headcount = dataset.timelines("staff", "headcount").unwrap();
    let series = headcount.series_for(store.horizon());
    assert_eq!(series, headcount.series_for(TimelineHorizon::EndOfShift));
}

fn t(raw: &str) -> w_ops_common::TimeOfDay {
    raw.parse().unwrap()
}
