//! ---
//! ops_section: "11-simulation-test-harness"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Synthetic timeline generation for the mock data layer."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use std::f64::consts::PI;

use anyhow::{Context, Result};
use rand::prelude::*;
use rand_distr::Normal;

use w_ops_common::config::{BaselineConfig, MetricConfig};
use w_ops_common::TimeOfDay;
use w_ops_timeline::{MetricTimelines, TimelineSample, TimelineSeries};

/// Deterministic synthetic series builder.
///
/// Each metric gets a smooth diurnal curve (half sine over the operating
/// window, scaled by the metric's baseline and swing). Samples up to the
/// baseline "now" carry noisy `actual` observations; samples past it carry
/// the clean `predicted` curve with confidence bands widening toward the
/// horizon. The sample landing on "now" carries both fields and the marker.
#[derive(Debug)]
pub struct SeriesGenerator {
    rng: StdRng,
    noise: Normal<f64>,
    sigma: f64,
}

impl SeriesGenerator {
    pub fn new(seed: u64, noise_sigma: f64) -> Result<Self> {
        let noise = Normal::new(0.0, noise_sigma)
            .context("noise sigma must be a finite, non-negative number")?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            noise,
            sigma: noise_sigma,
        })
    }

    /// Generate one series from the window start to `horizon_end`, sampled
    /// on the scrub step.
    ///
    /// The walk happens in whole minutes so the "now" sample lands exactly
    /// on the scrub grid instead of drifting through float accumulation.
    pub fn generate_series(
        &mut self,
        metric: &MetricConfig,
        baseline: &BaselineConfig,
        horizon_end: TimeOfDay,
    ) -> Result<TimelineSeries> {
        let step = baseline.scrub_step_minutes;
        let start = baseline.window_start.rounded_minutes();
        let end = horizon_end.rounded_minutes();
        let now = baseline
            .now_time
            .snap_to_step(step)
            .rounded_minutes();
        let span = f64::from(baseline.window_end.rounded_minutes() - start);

        let mut samples = Vec::with_capacity(((end - start) / step) as usize + 1);
        let mut minute = start;
        while minute <= end {
            let time = TimeOfDay::from_parts(minute / 60, minute % 60)
                .with_context(|| format!("sample minute {minute} escaped the operating day"))?;
            let phase = f64::from(minute - start) / span;
            let curve = metric.baseline + metric.swing * (PI * phase).sin();

            let sample = if minute < now {
                TimelineSample::actual(time, curve + self.noise_sample())
            } else if minute == now {
                let observed = curve + self.noise_sample();
                TimelineSample {
                    predicted: Some(observed),
                    now: true,
                    ..TimelineSample::actual(time, observed)
                }
            } else {
                let hours_out = f64::from(minute - now) / 60.0;
                let band = self.sigma * (1.0 + hours_out);
                TimelineSample {
                    upper: Some(curve + band),
                    lower: Some((curve - band).max(0.0)),
                    ..TimelineSample::predicted(time, curve)
                }
            };
            samples.push(sample);
            minute += step;
        }

        Ok(TimelineSeries::new(samples)?)
    }

    /// Generate the horizon variants for one metric: end-of-shift always,
    /// end-of-day only when the metric declares the extended horizon.
    pub fn generate_metric(
        &mut self,
        metric: &MetricConfig,
        baseline: &BaselineConfig,
    ) -> Result<MetricTimelines> {
        let end_of_shift = self.generate_series(metric, baseline, baseline.shift_end)?;
        let end_of_day = if metric.eod_horizon {
            Some(self.generate_series(metric, baseline, baseline.window_end)?)
        } else {
            None
        };
        Ok(MetricTimelines::new(end_of_shift, end_of_day))
    }

    fn noise_sample(&mut self) -> f64 {
        self.noise.sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(eod: bool) -> MetricConfig {
        MetricConfig {
            label: "Units per hour".to_owned(),
            unit: Some("u/h".to_owned()),
            baseline: 800.0,
            swing: 250.0,
            eod_horizon: eod,
        }
    }

    #[test]
    fn partitions_actual_and_predicted_at_now() {
        let baseline = BaselineConfig::default();
        let mut generator = SeriesGenerator::new(42, 5.0).unwrap();
        let series = generator
            .generate_series(&metric(false), &baseline, baseline.shift_end)
            .unwrap();

        let now = series.now_sample().expect("now marker present");
        assert_eq!(now.time.to_string(), "10:00");
        assert!(now.actual.is_some() && now.predicted.is_some());

        for sample in series.samples() {
            if sample.time < now.time {
                assert!(sample.actual.is_some() && sample.predicted.is_none());
            } else if sample.time > now.time {
                assert!(sample.actual.is_none() && sample.predicted.is_some());
                assert!(sample.upper.unwrap() >= sample.predicted.unwrap());
                assert!(sample.lower.unwrap() <= sample.predicted.unwrap());
            }
        }
    }

    #[test]
    fn covers_the_requested_horizon_on_the_scrub_step() {
        let baseline = BaselineConfig::default();
        let mut generator = SeriesGenerator::new(42, 0.0).unwrap();
        let series = generator
            .generate_series(&metric(false), &baseline, baseline.shift_end)
            .unwrap();
        assert_eq!(series.first().unwrap().time.to_string(), "06:00");
        assert_eq!(series.last().unwrap().time.to_string(), "14:00");
        // 06:00..=14:00 on a 15-minute step.
        assert_eq!(series.len(), 33);
    }

    #[test]
    fn confidence_bands_widen_toward_the_horizon() {
        let baseline = BaselineConfig::default();
        let mut generator = SeriesGenerator::new(7, 4.0).unwrap();
        let series = generator
            .generate_series(&metric(false), &baseline, baseline.shift_end)
            .unwrap();
        let forecasts: Vec<_> = series
            .samples()
            .iter()
            .filter(|s| !s.now && s.predicted.is_some())
            .collect();
        let near = forecasts.first().unwrap();
        let far = forecasts.last().unwrap();
        let near_band = near.upper.unwrap() - near.predicted.unwrap();
        let far_band = far.upper.unwrap() - far.predicted.unwrap();
        assert!(far_band > near_band);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let baseline = BaselineConfig::default();
        let series_a = SeriesGenerator::new(1337, 3.0)
            .unwrap()
            .generate_series(&metric(false), &baseline, baseline.shift_end)
            .unwrap();
        let series_b = SeriesGenerator::new(1337, 3.0)
            .unwrap()
            .generate_series(&metric(false), &baseline, baseline.shift_end)
            .unwrap();
        assert_eq!(series_a, series_b);
    }

    #[test]
    fn eod_variant_tracks_the_metric_flag() {
        let baseline = BaselineConfig::default();
        let mut generator = SeriesGenerator::new(42, 1.0).unwrap();
        let with_eod = generator.generate_metric(&metric(true), &baseline).unwrap();
        assert!(with_eod.end_of_day.is_some());
        let eod = with_eod.end_of_day.as_ref().unwrap();
        assert_eq!(eod.last().unwrap().time.to_string(), "22:00");

        let without = generator.generate_metric(&metric(false), &baseline).unwrap();
        assert!(without.end_of_day.is_none());
    }
}
