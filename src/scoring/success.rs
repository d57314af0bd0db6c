//! Success score: primary goal, secondary goals and schedule efficiency

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::secondary::secondary_goals_score;
use crate::config::{ScoringConfig, TierThresholds};
use crate::date_window::days_since;
use crate::experiment::{ExperimentRecord, MetricSet, PrimaryGoal, SuccessCriteria};

/// Qualitative success tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuccessStatus {
    /// Score at or above the `excellent` threshold.
    Excellent,
    /// Score at or above the `good` threshold.
    Good,
    /// Score at or above the `fair` threshold.
    Fair,
    /// Everything below `fair`.
    Poor,
}

impl SuccessStatus {
    /// Tier for `score`; each tier's lower bound is inclusive.
    #[must_use]
    pub fn from_score(score: f64, thresholds: &TierThresholds) -> Self {
        if score >= thresholds.excellent {
            Self::Excellent
        } else if score >= thresholds.good {
            Self::Good
        } else if score >= thresholds.fair {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Per-category scores behind a [`SuccessReport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBreakdown {
    /// Primary-goal attainment, 0 up to the overperformance cap (150).
    pub primary_goal: f64,
    /// Share of secondary goals met, 0-100.
    pub secondary_goals: f64,
    /// Schedule efficiency, 0-100.
    pub efficiency: f64,
}

/// Result of [`compute_success`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuccessReport {
    /// Weighted total, 0-100.
    pub score: u8,
    /// Category scores.
    pub breakdown: SuccessBreakdown,
    /// Tier derived from `score`.
    pub status: SuccessStatus,
}

/// Score an experiment as of `now` using the default [`ScoringConfig`].
#[must_use]
pub fn compute_success(experiment: &ExperimentRecord, now: DateTime<Utc>) -> SuccessReport {
    compute_success_with(experiment, now, &ScoringConfig::default())
}

/// Score an experiment as of `now`.
///
/// Total over all inputs: missing targets, empty goal lists and unknown goal
/// values fall back to documented defaults instead of failing.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_success_with(
    experiment: &ExperimentRecord,
    now: DateTime<Utc>,
    config: &ScoringConfig,
) -> SuccessReport {
    let criteria = experiment.success_criteria();
    let metrics = experiment.metrics();

    let primary = primary_goal_score(criteria, metrics, config.primary_overperformance_cap);
    let secondary = secondary_goals_score(criteria, metrics);
    let elapsed = days_since(experiment.effective_start(), now);
    let efficiency = efficiency_score(primary, elapsed, criteria.time_frame, config.pace_epsilon);

    let w = &config.weights;
    let blended = w.primary_goal * primary.min(100.0)
        + w.secondary_goals * secondary.min(100.0)
        + w.efficiency * efficiency.min(100.0);
    let score = blended.round().clamp(0.0, 100.0) as u8;
    let status = SuccessStatus::from_score(f64::from(score), &config.thresholds);

    tracing::debug!(
        experiment_id = experiment.id(),
        score,
        primary,
        secondary,
        efficiency,
        status = ?status,
        "computed success score"
    );

    SuccessReport {
        score,
        breakdown: SuccessBreakdown {
            primary_goal: primary,
            secondary_goals: secondary,
            efficiency,
        },
        status,
    }
}

/// Primary-goal attainment as a percentage of target, clamped to
/// `[0, cap]`.
///
/// Zero when the goal is unrecognized, the target is absent or not positive,
/// or the actual value is not a finite number. A cap below 100 is raised to
/// 100; a NaN cap is read as 100.
#[must_use]
pub fn primary_goal_score(criteria: &SuccessCriteria, metrics: &MetricSet, cap: f64) -> f64 {
    let Some(key) = criteria.primary_goal.metric_key() else {
        if criteria.primary_goal == PrimaryGoal::Unknown {
            tracing::debug!(
                event = "primary_goal.unknown",
                "unrecognized primary goal scored as zero"
            );
        }
        return 0.0;
    };
    let target = criteria.target_metrics.get(key).unwrap_or(0.0);
    if !(target > 0.0) {
        return 0.0;
    }
    let actual = metrics.value_or_zero(key);
    if !actual.is_finite() {
        return 0.0;
    }
    let cap = if cap.is_nan() { 100.0 } else { cap.max(100.0) };
    (100.0 * actual / target).clamp(0.0, cap)
}

/// Schedule efficiency, 0-100.
///
/// Once the primary goal is reached, efficiency is the share of the time
/// frame left unused. Before that, it is attainment divided by the share of
/// the time frame consumed (pace), so being ahead of schedule saturates at
/// 100 and falling behind drags it down. Elapsed days before the start count
/// as zero; a zero time frame is treated as one day. `epsilon` is floored
/// at the smallest positive `f64` so the pace never divides by zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn efficiency_score(primary: f64, elapsed_days: i64, time_frame: u32, epsilon: f64) -> f64 {
    let frame = f64::from(time_frame.max(1));
    let consumed = elapsed_days.max(0) as f64 / frame;

    let raw = if primary >= 100.0 {
        100.0 * (1.0 - consumed)
    } else {
        100.0 * (primary / 100.0) / consumed.max(epsilon.max(f64::MIN_POSITIVE))
    };
    raw.clamp(0.0, 100.0)
}
