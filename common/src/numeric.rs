//! Shared numeric helpers for the descent pipeline.
//!
//! Every scalar that feeds the trajectory or the report goes through
//! [`floor5`] immediately before it is used, not just at display time.
//! Printing a value that skipped truncation produces a different run.

/// Truncates `value` toward negative infinity at the 5th decimal digit.
#[inline]
pub fn floor5(value: f64) -> f64 {
    (value * 100000.0).floor() / 100000.0
}

/// Fixed-width 5-decimal rendering of the truncated value.
pub fn format5(value: f64) -> String {
    format!("{:.5}", floor5(value))
}

/// 1-decimal rendering of the truncated value. Only the initial-point
/// banner uses this width.
pub fn format1(value: f64) -> String {
    format!("{:.1}", floor5(value))
}

/// Euclidean norm of `v`. Operates on the raw components; callers that
/// want truncated inputs truncate before calling.
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|e| e * e).sum::<f64>().sqrt()
}
