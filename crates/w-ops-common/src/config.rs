//! ---
//! ops_section: "01-core-functionality"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Shared primitives and utilities for the core runtime."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::logging::LogFormat;
use crate::time::{OperatingWindow, TimeOfDay};

fn default_now_time() -> TimeOfDay {
    TimeOfDay::from_parts(10, 0).expect("valid default baseline time")
}

fn default_window_start() -> TimeOfDay {
    TimeOfDay::from_parts(6, 0).expect("valid default window start")
}

fn default_window_end() -> TimeOfDay {
    TimeOfDay::from_parts(22, 0).expect("valid default window end")
}

fn default_shift_end() -> TimeOfDay {
    TimeOfDay::from_parts(14, 0).expect("valid default shift end")
}

fn default_scrub_step_minutes() -> u32 {
    15
}

fn default_logging_directory() -> PathBuf {
    PathBuf::from("target/logs")
}

fn default_log_format() -> LogFormat {
    LogFormat::StructuredJson
}

fn default_simulation_seed() -> u64 {
    0xC0FFEEu64
}

fn default_noise_sigma() -> f64 {
    0.2
}

fn default_randomized_inputs() -> bool {
    true
}

/// Primary configuration object for the W-OPS dashboard core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub baseline: BaselineConfig,
    #[serde(default)]
    pub views: IndexMap<String, ViewConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Metadata describing where an [`AppConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedAppConfig {
    pub config: AppConfig,
    pub source: PathBuf,
}

impl AppConfig {
    pub const ENV_CONFIG_PATH: &str = "W_OPS_CONFIG";

    /// Load configuration from disk, respecting the `W_OPS_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        Ok(Self::load_with_source(candidates)?.config)
    }

    /// Load configuration from disk together with the effective source path.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedAppConfig> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                let path = PathBuf::from(env_path);
                let config = Self::from_path(path.clone())?;
                return Ok(LoadedAppConfig {
                    config,
                    source: path,
                });
            }
        }

        for candidate in candidates {
            if candidate.as_ref().exists() {
                let path = candidate.as_ref().to_path_buf();
                let config = Self::from_path(path.clone())?;
                return Ok(LoadedAppConfig {
                    config,
                    source: path,
                });
            }
        }

        Err(anyhow!(
            "no configuration files found. inspected: {}",
            candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    fn from_path(path: PathBuf) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str::<AppConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Retrieve a view configuration by identifier.
    pub fn view(&self, view_id: &str) -> Option<&ViewConfig> {
        self.views.get(view_id)
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        self.baseline.validate()?;
        if self.views.is_empty() {
            return Err(anyhow!("configuration must declare at least one view"));
        }
        for (view_id, view) in &self.views {
            view.validate(view_id)?;
        }
        self.simulation.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            baseline: BaselineConfig::default(),
            views: IndexMap::new(),
            logging: LoggingConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl std::str::FromStr for AppConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: AppConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

/// Reference times the contextual-time scrubber operates against.
///
/// `now_time` is a fixed baseline rather than the machine clock: the
/// dashboard renders mock data keyed to one reference instant, and every
/// restart returns to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineConfig {
    #[serde(default = "default_now_time")]
    pub now_time: TimeOfDay,
    #[serde(default = "default_window_start")]
    pub window_start: TimeOfDay,
    #[serde(default = "default_window_end")]
    pub window_end: TimeOfDay,
    #[serde(default = "default_shift_end")]
    pub shift_end: TimeOfDay,
    #[serde(default = "default_scrub_step_minutes")]
    pub scrub_step_minutes: u32,
}

impl BaselineConfig {
    /// The scrubber window as a single value.
    pub fn window(&self) -> OperatingWindow {
        OperatingWindow::new(self.window_start, self.window_end)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_start >= self.window_end {
            return Err(anyhow!(
                "operating window start {} must precede end {}",
                self.window_start,
                self.window_end
            ));
        }
        if self.shift_end <= self.window_start || self.shift_end > self.window_end {
            return Err(anyhow!(
                "shift end {} must fall inside the operating window",
                self.shift_end
            ));
        }
        if !self.window().contains(self.now_time) {
            return Err(anyhow!(
                "baseline now_time {} must fall inside the operating window",
                self.now_time
            ));
        }
        if self.scrub_step_minutes == 0 || self.scrub_step_minutes > 60 {
            return Err(anyhow!(
                "scrub_step_minutes must lie in 1..=60, got {}",
                self.scrub_step_minutes
            ));
        }
        Ok(())
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            now_time: default_now_time(),
            window_start: default_window_start(),
            window_end: default_window_end(),
            shift_end: default_shift_end(),
            scrub_step_minutes: default_scrub_step_minutes(),
        }
    }
}

/// A dashboard view (staff, zones, equipment) and the metrics it renders.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewConfig {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metrics: IndexMap<String, MetricConfig>,
}

impl ViewConfig {
    pub fn validate(&self, view_id: &str) -> Result<()> {
        if self.metrics.is_empty() {
            return Err(anyhow!(
                "view '{}' must declare at least one metric",
                view_id
            ));
        }
        for (metric_id, metric) in &self.metrics {
            metric.validate(view_id, metric_id)?;
        }
        Ok(())
    }
}

/// Shape parameters for one metric timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricConfig {
    pub label: String,
    #[serde(default)]
    pub unit: Option<String>,
    /// Resting value the synthetic diurnal curve oscillates around.
    pub baseline: f64,
    /// Peak deviation from the resting value across the operating day.
    pub swing: f64,
    /// Whether this metric also carries an extended end-of-day timeline.
    #[serde(default)]
    pub eod_horizon: bool,
}

impl MetricConfig {
    pub fn validate(&self, view_id: &str, metric_id: &str) -> Result<()> {
        if !self.baseline.is_finite() || !self.swing.is_finite() {
            return Err(anyhow!(
                "metric '{}/{}' must declare finite baseline and swing",
                view_id,
                metric_id
            ));
        }
        if self.swing < 0.0 {
            return Err(anyhow!(
                "metric '{}/{}' swing must be non-negative",
                view_id,
                metric_id
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_logging_directory(),
            format: default_log_format(),
            file_prefix: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_randomized_inputs")]
    pub enable_randomized_inputs: bool,
    #[serde(default)]
    pub scenario_files: Vec<PathBuf>,
    #[serde(default = "default_simulation_seed")]
    pub random_seed: u64,
    #[serde(default = "default_noise_sigma")]
    pub noise_sigma: f64,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.noise_sigma.is_finite() || self.noise_sigma < 0.0 {
            return Err(anyhow!(
                "simulation noise_sigma must be a non-negative number, got {}",
                self.noise_sigma
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            enable_randomized_inputs: default_randomized_inputs(),
            scenario_files: Vec::new(),
            random_seed: default_simulation_seed(),
            noise_sigma: default_noise_sigma(),
        }
    }
}
