//! ROI from booked meetings and spend

use crate::config::VALUE_PER_MEETING;
use crate::experiment::{metric_keys, MetricSet};

/// ROI using the standard value per meeting.
///
/// `(meetings_booked * 7200) / cost`; zero when either input is zero (or
/// negative). Not clamped.
#[must_use]
pub fn compute_roi(meetings_booked: f64, cost: f64) -> f64 {
    compute_roi_with(meetings_booked, cost, VALUE_PER_MEETING)
}

/// ROI with an explicit value per meeting.
#[must_use]
pub fn compute_roi_with(meetings_booked: f64, cost: f64, value_per_meeting: f64) -> f64 {
    if !(cost > 0.0) || !(meetings_booked > 0.0) {
        return 0.0;
    }
    meetings_booked * value_per_meeting / cost
}

/// Recompute the derived `roi` metric in place.
///
/// Runs only when `meetingsBooked` or `cost` is present; returns the new ROI
/// in that case, otherwise leaves `metrics` untouched and returns `None`.
pub fn sync_roi(metrics: &mut MetricSet, value_per_meeting: f64) -> Option<f64> {
    if !metrics.contains(metric_keys::MEETINGS_BOOKED) && !metrics.contains(metric_keys::COST) {
        return None;
    }
    let roi = compute_roi_with(
        metrics.value_or_zero(metric_keys::MEETINGS_BOOKED),
        metrics.value_or_zero(metric_keys::COST),
        value_per_meeting,
    );
    metrics.set(metric_keys::ROI, roi);
    Some(roi)
}
