//! ---
//! ops_section: "11-simulation-test-harness"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Assembled mock datasets for dashboard views."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use anyhow::Result;
use indexmap::IndexMap;
use tracing::info;

use w_ops_common::config::AppConfig;
use w_ops_scenario::ScenarioCatalog;
use w_ops_timeline::MetricTimelines;

use crate::generator::SeriesGenerator;
use crate::loader;

/// Everything the dashboard's data layer would otherwise fetch: one set of
/// metric timelines per view, generated from configuration.
#[derive(Debug, Default)]
pub struct MockDataset {
    views: IndexMap<String, IndexMap<String, MetricTimelines>>,
}

impl MockDataset {
    /// Generate timelines for every configured view/metric pair.
    ///
    /// With randomized inputs disabled the generator runs noise-free, which
    /// keeps fixture data bit-stable across runs regardless of seed.
    pub fn build(config: &AppConfig) -> Result<Self> {
        let sigma = if config.simulation.enable_randomized_inputs {
            config.simulation.noise_sigma
        } else {
            0.0
        };
        let mut generator = SeriesGenerator::new(config.simulation.random_seed, sigma)?;
        let mut views = IndexMap::new();
        for (view_id, view) in &config.views {
            let mut metrics = IndexMap::new();
            for (metric_id, metric) in &view.metrics {
                let timelines = generator.generate_metric(metric, &config.baseline)?;
                metrics.insert(metric_id.clone(), timelines);
            }
            views.insert(view_id.clone(), metrics);
        }
        info!(views = views.len(), "mock dataset generated");
        Ok(Self { views })
    }

    /// Timelines for one view/metric pair.
    pub fn timelines(&self, view_id: &str, metric_id: &str) -> Option<&MetricTimelines> {
        self.views.get(view_id).and_then(|metrics| metrics.get(metric_id))
    }

    /// Metric timelines of one view, in configuration order.
    pub fn view(&self, view_id: &str) -> Option<&IndexMap<String, MetricTimelines>> {
        self.views.get(view_id)
    }

    pub fn view_ids(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }
}

/// Build the scenario catalog named by the configuration's scenario files.
pub fn catalog_from_config(config: &AppConfig) -> Result<ScenarioCatalog> {
    loader::load_catalog(&config.simulation.scenario_files)
}
