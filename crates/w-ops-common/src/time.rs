//! ---
//! ops_section: "01-core-functionality"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Shared primitives and utilities for the core runtime."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
//! Wall-clock primitives for the operating day.
//!
//! Every timeline in W-OPS is keyed by a [`TimeOfDay`]: a wall-clock instant
//! stored as decimal hours (`14.25` is 14:15) and rendered as a zero-padded
//! `"HH:MM"` string at every serialization boundary. Decimal hours keep the
//! interpolation arithmetic trivial while the string form stays readable in
//! configuration and scenario files.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Minutes in a full operating day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Errors raised when constructing a [`TimeOfDay`] from external input.
#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    #[error("time of day must be finite, got {0}")]
    NonFinite(f64),
    #[error("time of day must lie in [0, 24) hours, got {0}")]
    OutOfRange(f64),
    #[error("invalid wall-clock time '{0}', expected HH:MM")]
    Unparseable(String),
}

/// A wall-clock time within the operating day, stored as decimal hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeOfDay(f64);

impl TimeOfDay {
    /// Construct from decimal hours, rejecting non-finite and out-of-day input.
    pub fn from_decimal(hours: f64) -> Result<Self, TimeError> {
        if !hours.is_finite() {
            return Err(TimeError::NonFinite(hours));
        }
        if !(0.0..24.0).contains(&hours) {
            return Err(TimeError::OutOfRange(hours));
        }
        Ok(Self(hours))
    }

    /// Construct from an hour/minute pair.
    pub fn from_parts(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour >= 24 || minute >= 60 {
            return Err(TimeError::Unparseable(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(f64::from(hour) + f64::from(minute) / 60.0))
    }

    /// The raw decimal-hour representation.
    pub fn as_decimal(self) -> f64 {
        self.0
    }

    /// Minutes past midnight, rounded to the nearest whole minute.
    ///
    /// Rounding never escapes the day: 23:59.6 stays at 23:59 rather than
    /// rolling over to a nonexistent 24:00.
    pub fn rounded_minutes(self) -> u32 {
        let minutes = (self.0 * 60.0).round() as u32;
        minutes.min(MINUTES_PER_DAY - 1)
    }

    /// Wall-clock hour after minute rounding.
    pub fn hour(self) -> u32 {
        self.rounded_minutes() / 60
    }

    /// Wall-clock minute after minute rounding.
    pub fn minute(self) -> u32 {
        self.rounded_minutes() % 60
    }

    /// Clamp into an operating window. Scrubber layers call this before
    /// writing into the time context store, which itself accepts any value.
    pub fn clamp_to(self, window: &OperatingWindow) -> Self {
        Self(self.0.clamp(window.start.0, window.end.0))
    }

    /// Snap to the nearest multiple of `step_minutes` past midnight.
    /// A zero step is treated as "no snapping".
    pub fn snap_to_step(self, step_minutes: u32) -> Self {
        if step_minutes == 0 {
            return self;
        }
        let step = f64::from(step_minutes) / 60.0;
        let snapped = (self.0 / step).round() * step;
        Self(snapped.min(24.0 - step))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| TimeError::Unparseable(s.to_owned()))?;
        Self::from_parts(parsed.hour(), parsed.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Inclusive scrubber window over the operating day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl OperatingWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.start <= t && t <= self.end
    }

    /// Window span in decimal hours.
    pub fn span_hours(&self) -> f64 {
        self.end.0 - self.start.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_round_trip() {
        for raw in ["06:00", "10:15", "14:45", "22:00", "00:00", "23:59"] {
            let t: TimeOfDay = raw.parse().unwrap();
            assert_eq!(t.to_string(), raw);
        }
    }

    #[test]
    fn decimal_form_matches_wall_clock() {
        let t: TimeOfDay = "14:15".parse().unwrap();
        assert!((t.as_decimal() - 14.25).abs() < 1e-9);
    }

    #[test]
    fn display_rounds_to_nearest_minute() {
        let t = TimeOfDay::from_decimal(10.258).unwrap();
        assert_eq!(t.to_string(), "10:15");
        let late = TimeOfDay::from_decimal(23.9999).unwrap();
        assert_eq!(late.to_string(), "23:59");
    }

    #[test]
    fn rejects_out_of_day_input() {
        assert_eq!(
            TimeOfDay::from_decimal(24.0),
            Err(TimeError::OutOfRange(24.0))
        );
        assert!(TimeOfDay::from_decimal(f64::NAN).is_err());
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("10:61".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn clamps_into_window() {
        let window = OperatingWindow::new(
            "06:00".parse().unwrap(),
            "22:00".parse().unwrap(),
        );
        let early: TimeOfDay = "04:30".parse().unwrap();
        let late: TimeOfDay = "23:00".parse().unwrap();
        assert_eq!(early.clamp_to(&window).to_string(), "06:00");
        assert_eq!(late.clamp_to(&window).to_string(), "22:00");
        assert!(window.contains("10:00".parse().unwrap()));
        assert!(!window.contains(early));
    }

    #[test]
    fn snaps_to_quarter_hours() {
        let t = TimeOfDay::from_decimal(10.13).unwrap();
        assert_eq!(t.snap_to_step(15).to_string(), "10:15");
        let t = TimeOfDay::from_decimal(10.11).unwrap();
        assert_eq!(t.snap_to_step(15).to_string(), "10:00");
        let t = TimeOfDay::from_decimal(10.2).unwrap();
        assert_eq!(t.snap_to_step(0), t);
    }

    #[test]
    fn serde_uses_the_string_form() {
        let t: TimeOfDay = "09:45".parse().unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"09:45\"");
        let back: TimeOfDay = serde_json::from_str("\"09:45\"").unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<TimeOfDay>("\"24:00\"").is_err());
    }
}
