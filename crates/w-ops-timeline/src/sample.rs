//! ---
//! ops_section: "08-shift-models-interpolation"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Timeline data model and interpolation routines."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};
use w_ops_common::TimeOfDay;

use crate::errors::{Result, TimelineError};

/// One time-stamped point in a metric series.
///
/// A series mixes a contiguous prefix of `actual` values with a suffix of
/// `predicted` values; the two overlap at exactly one sample carrying the
/// `now` marker, where both fields are populated. `upper`/`lower` confidence
/// bounds exist only for chart band rendering and never participate in
/// interpolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSample {
    pub time: TimeOfDay,
    #[serde(default)]
    pub actual: Option<f64>,
    #[serde(default)]
    pub predicted: Option<f64>,
    #[serde(default)]
    pub upper: Option<f64>,
    #[serde(default)]
    pub lower: Option<f64>,
    #[serde(default)]
    pub now: bool,
}

impl TimelineSample {
    /// An observed sample carrying only an `actual` value.
    pub fn actual(time: TimeOfDay, value: f64) -> Self {
        Self {
            time,
            actual: Some(value),
            predicted: None,
            upper: None,
            lower: None,
            now: false,
        }
    }

    /// A forecast sample carrying only a `predicted` value.
    pub fn predicted(time: TimeOfDay, value: f64) -> Self {
        Self {
            time,
            actual: None,
            predicted: Some(value),
            upper: None,
            lower: None,
            now: false,
        }
    }

    /// The sample's authoritative value: `actual` when present, else
    /// `predicted`.
    pub fn resolved(&self) -> Option<f64> {
        self.actual.or(self.predicted)
    }

    fn validate(&self, index: usize) -> Result<()> {
        for (field, value) in [
            ("actual", self.actual),
            ("predicted", self.predicted),
            ("upper", self.upper),
            ("lower", self.lower),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(TimelineError::NonFinite { index, field });
                }
            }
        }
        Ok(())
    }
}

/// A validated, strictly time-ordered sequence of samples.
///
/// Construction is the trust boundary: consumers downstream (including the
/// interpolator) rely on monotonic, finite data and never re-check it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimelineSeries {
    samples: Vec<TimelineSample>,
}

impl TimelineSeries {
    /// Validate and wrap a sample sequence. Empty series are valid and
    /// answer every query with `None`.
    pub fn new(samples: Vec<TimelineSample>) -> Result<Self> {
        for (index, sample) in samples.iter().enumerate() {
            sample.validate(index)?;
            if index > 0 && samples[index - 1].time >= sample.time {
                return Err(TimelineError::NonMonotonic { index });
            }
        }
        Ok(Self { samples })
    }

    /// A series with no samples.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[TimelineSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&TimelineSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TimelineSample> {
        self.samples.last()
    }

    /// The sample flagged as the actual/predicted crossover, if any.
    pub fn now_sample(&self) -> Option<&TimelineSample> {
        self.samples.iter().find(|s| s.now)
    }

    /// Whether `t` falls inside the covered range.
    pub fn covers(&self, t: TimeOfDay) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => first.time <= t && t <= last.time,
            _ => false,
        }
    }
}

impl<'de> Deserialize<'de> for TimelineSeries {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let samples = Vec::<TimelineSample>::deserialize(deserializer)?;
        TimelineSeries::new(samples).map_err(serde::de::Error::custom)
    }
}
