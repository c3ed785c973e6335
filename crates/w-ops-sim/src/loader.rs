//! ---
//! ops_section: "11-simulation-test-harness"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Mock dataset and scenario file loading."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::debug;

use w_ops_common::TimeOfDay;
use w_ops_scenario::{Scenario, ScenarioCatalog};
use w_ops_timeline::{TimelineSample, TimelineSeries};

/// Raw sample representation when deserializing tabular series files.
#[derive(Debug, Deserialize)]
struct SampleRow {
    time: String,
    #[serde(default)]
    actual: Option<f64>,
    #[serde(default)]
    predicted: Option<f64>,
    #[serde(default)]
    upper: Option<f64>,
    #[serde(default)]
    lower: Option<f64>,
    #[serde(default)]
    now: Option<bool>,
}

impl SampleRow {
    fn into_sample(self) -> Result<TimelineSample> {
        let time: TimeOfDay = self
            .time
            .parse()
            .with_context(|| format!("invalid sample time '{}'", self.time))?;
        Ok(TimelineSample {
            time,
            actual: self.actual,
            predicted: self.predicted,
            upper: self.upper,
            lower: self.lower,
            now: self.now.unwrap_or(false),
        })
    }
}

/// Load one metric series from a JSON array or a headed CSV file.
pub fn load_series(path: &Path) -> Result<TimelineSeries> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => series_from_json(path),
        Some("csv") => series_from_csv(path),
        _ => anyhow::bail!("unsupported series format: {}", path.display()),
    }
}

fn series_from_json(path: &Path) -> Result<TimelineSeries> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("unable to read series file {}", path.display()))?;
    let series: TimelineSeries = serde_json::from_str(&contents)
        .with_context(|| format!("invalid series JSON {}", path.display()))?;
    debug!(path = %path.display(), samples = series.len(), "series loaded");
    Ok(series)
}

fn series_from_csv(path: &Path) -> Result<TimelineSeries> {
    let file = fs::File::open(path)
        .with_context(|| format!("unable to open series csv {}", path.display()))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let mut samples = Vec::new();
    for row in reader.deserialize::<SampleRow>() {
        let raw = row.with_context(|| format!("invalid series row in {}", path.display()))?;
        samples.push(raw.into_sample()?);
    }
    let series = TimelineSeries::new(samples)
        .with_context(|| format!("series {} failed validation", path.display()))?;
    debug!(path = %path.display(), samples = series.len(), "series loaded");
    Ok(series)
}

/// Load the scenarios declared in one JSON file.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("unable to read scenario file {}", path.display()))?;
    let scenarios: Vec<Scenario> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid scenario JSON {}", path.display()))?;
    Ok(scenarios)
}

/// Assemble a catalog from a set of scenario files, in declaration order.
pub fn load_catalog<P: AsRef<Path>>(paths: &[P]) -> Result<ScenarioCatalog> {
    let mut catalog = ScenarioCatalog::new();
    for path in paths {
        let path = path.as_ref();
        for scenario in load_scenarios(path)? {
            let id = scenario.id.clone();
            catalog
                .insert(scenario)
                .with_context(|| format!("scenario '{}' from {}", id, path.display()))?;
        }
        debug!(path = %path.display(), "scenario file loaded");
    }
    Ok(catalog)
}
