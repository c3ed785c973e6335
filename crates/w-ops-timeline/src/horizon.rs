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

use crate::sample::TimelineSeries;

/// Forecast horizon a timeline is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineHorizon {
    /// Default horizon: the current shift's end.
    #[default]
    EndOfShift,
    /// Extended horizon: the end of the operating day.
    EndOfDay,
}

/// The horizon variants of one metric's timeline.
///
/// Not every metric carries an extended variant; requesting end-of-day data
/// for one that doesn't falls back to the end-of-shift series rather than
/// presenting a hole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTimelines {
    pub end_of_shift: TimelineSeries,
    #[serde(default)]
    pub end_of_day: Option<TimelineSeries>,
}

impl MetricTimelines {
    pub fn new(end_of_shift: TimelineSeries, end_of_day: Option<TimelineSeries>) -> Self {
        Self {
            end_of_shift,
            end_of_day,
        }
    }

    /// Resolve the series to render for a horizon selection.
    pub fn series_for(&self, horizon: TimelineHorizon) -> &TimelineSeries {
        match horizon {
            TimelineHorizon::EndOfShift => &self.end_of_shift,
            TimelineHorizon::EndOfDay => self.end_of_day.as_ref().unwrap_or(&self.end_of_shift),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::TimelineSample;

    #[test]
    fn falls_back_to_end_of_shift() {
        let eos = TimelineSeries::new(vec![TimelineSample::actual(
            "08:00".parse().unwrap(),
            1.0,
        )])
        .unwrap();
        let timelines = MetricTimelines::new(eos.clone(), None);
        assert_eq!(timelines.series_for(TimelineHorizon::EndOfDay), &eos);
        assert_eq!(timelines.series_for(TimelineHorizon::EndOfShift), &eos);
    }

    #[test]
    fn prefers_extended_variant_when_present() {
        let eos = TimelineSeries::new(vec![TimelineSample::actual(
            "08:00".parse().unwrap(),
            1.0,
        )])
        .unwrap();
        let eod = TimelineSeries::new(vec![
            TimelineSample::actual("08:00".parse().unwrap(), 1.0),
            TimelineSample::predicted("21:00".parse().unwrap(), 3.0),
        ])
        .unwrap();
        let timelines = MetricTimelines::new(eos.clone(), Some(eod.clone()));
        assert_eq!(timelines.series_for(TimelineHorizon::EndOfDay), &eod);
        assert_eq!(timelines.series_for(TimelineHorizon::EndOfShift), &eos);
    }
}
