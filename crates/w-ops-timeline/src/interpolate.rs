//! ---
//! ops_section: "08-shift-models-interpolation"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Timeline data model and interpolation routines."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
//! Point-in-time queries over a validated series.
//!
//! The series is piecewise-linear between adjacent samples. Queries outside
//! the covered range answer `None`: there is no extrapolation, and callers
//! render the absence (a dash, a hidden badge) rather than a guess.

use w_ops_common::TimeOfDay;

use crate::sample::TimelineSeries;

impl TimelineSeries {
    /// Best-estimate value at `query`, or `None` when the series has no
    /// answer there.
    ///
    /// A query landing exactly on a sample returns that sample's
    /// authoritative value (`actual` over `predicted`). Between samples the
    /// bracketing pair is interpolated linearly, each endpoint resolving
    /// through the same fallback; if either endpoint carries no value the
    /// query has no answer. Confidence bounds are ignored here, being chart
    /// band inputs rather than data. The result is the raw floating-point
    /// value; rounding and formatting belong to the caller.
    pub fn value_at(&self, query: TimeOfDay) -> Option<f64> {
        let samples = self.samples();
        let (first, last) = (samples.first()?, samples.last()?);
        let q = query.as_decimal();
        if q < first.time.as_decimal() || q > last.time.as_decimal() {
            return None;
        }

        if let Some(hit) = samples.iter().find(|s| s.time.as_decimal() == q) {
            return hit.resolved();
        }

        // Strict ordering guarantees the bracket exists and is non-degenerate.
        let after = samples.iter().position(|s| s.time.as_decimal() > q)?;
        let (a, b) = (&samples[after - 1], &samples[after]);
        let (va, vb) = (a.resolved()?, b.resolved()?);
        let (ta, tb) = (a.time.as_decimal(), b.time.as_decimal());
        Some(va + (vb - va) * (q - ta) / (tb - ta))
    }
}
