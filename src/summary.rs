//! Per-card and per-dashboard derived views
//!
//! Bundles everything the presentation layer derives from a record on each
//! render, so a card needs one call instead of six.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ScoringConfig;
use crate::date_window::{countdown, days_remaining, is_overdue, Countdown};
use crate::experiment::{
    metric_keys, resolve_targeting, ExperimentRecord, ExperimentStatus, IcpProfile,
    ResolvedTargeting,
};
use crate::scoring::{compute_roi_with, compute_success_with, SuccessReport};

/// Everything derived from one experiment at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentSummary<'a> {
    /// The summarized record.
    pub record: &'a ExperimentRecord,
    /// Success score, breakdown and tier.
    pub success: SuccessReport,
    /// ROI from current meetings and cost.
    pub roi: f64,
    /// Calendar days until the end date.
    pub days_remaining: i64,
    /// Countdown, present only inside the visibility window.
    pub countdown: Option<Countdown>,
    /// Active with the end date passed.
    pub overdue: bool,
    /// Authoritative targeting with ICP references looked up.
    pub targeting: Option<ResolvedTargeting<'a>>,
}

/// Derive the card view of `record` as of `now`.
#[must_use]
pub fn summarize<'a>(
    record: &'a ExperimentRecord,
    profiles: &'a [IcpProfile],
    now: DateTime<Utc>,
    config: &ScoringConfig,
) -> ExperimentSummary<'a> {
    let metrics = record.metrics();
    ExperimentSummary {
        record,
        success: compute_success_with(record, now, config),
        roi: compute_roi_with(
            metrics.value_or_zero(metric_keys::MEETINGS_BOOKED),
            metrics.value_or_zero(metric_keys::COST),
            config.value_per_meeting,
        ),
        days_remaining: days_remaining(record.end_date(), now),
        countdown: countdown(record.end_date(), now, config.countdown_window_days),
        overdue: is_overdue(record.status(), record.end_date(), now),
        targeting: resolve_targeting(record).map(|t| t.lookup(profiles)),
    }
}

/// Headline numbers for the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Number of experiments.
    pub total: usize,
    /// Active experiments.
    pub active: usize,
    /// Paused experiments.
    pub paused: usize,
    /// Completed experiments.
    pub completed: usize,
    /// Failed experiments.
    pub failed: usize,
    /// Experiments with an unrecognized status.
    pub unknown: usize,
    /// Active experiments past their end date.
    pub overdue: usize,
    /// Mean success score; zero with no experiments.
    pub average_score: f64,
}

/// Aggregate stats over `records` as of `now`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn dashboard_stats<'a, I>(records: I, now: DateTime<Utc>, config: &ScoringConfig) -> DashboardStats
where
    I: IntoIterator<Item = &'a ExperimentRecord>,
{
    let mut stats = DashboardStats::default();
    let mut score_sum = 0u64;

    for record in records {
        stats.total += 1;
        match record.status() {
            ExperimentStatus::Active => stats.active += 1,
            ExperimentStatus::Paused => stats.paused += 1,
            ExperimentStatus::Completed => stats.completed += 1,
            ExperimentStatus::Failed => stats.failed += 1,
            ExperimentStatus::Unknown => stats.unknown += 1,
        }
        if is_overdue(record.status(), record.end_date(), now) {
            stats.overdue += 1;
        }
        score_sum += u64::from(compute_success_with(record, now, config).score);
    }

    if stats.total > 0 {
        stats.average_score = score_sum as f64 / stats.total as f64;
    }
    stats
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::date_window::UrgencyTier;
    use crate::experiment::{MetricSet, PrimaryGoal, SuccessCriteria};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 1, 8, 0, 0).unwrap()
    }

    fn profiles() -> Vec<IcpProfile> {
        vec![IcpProfile {
            id: "icp-devtools".into(),
            name: "DevTools buyers".into(),
            job_titles: vec!["VP Engineering".into()],
            industries: vec![],
            company_sizes: vec![],
            pain_points: vec![],
        }]
    }

    fn record(id: &str, end_in_days: i64, status: ExperimentStatus) -> ExperimentRecord {
        let start = now() - Duration::days(10);
        ExperimentRecord::builder(id, "Summary", start, now() + Duration::days(end_in_days))
            .status(status)
            .started_at(start)
            .icp_profile_id("icp-devtools")
            .success_criteria(
                SuccessCriteria::new(PrimaryGoal::Meetings, 20)
                    .with_target(metric_keys::MEETINGS_BOOKED, 10.0),
            )
            .metrics(
                MetricSet::new()
                    .with(metric_keys::MEETINGS_BOOKED, 8.0)
                    .with(metric_keys::COST, 14_400.0),
            )
            .build()
    }

    #[test]
    fn test_summary_fields() {
        let profiles = profiles();
        let rec = record("exp-1", 2, ExperimentStatus::Active);
        let summary = summarize(&rec, &profiles, now(), &ScoringConfig::default());

        assert_eq!(summary.success.score, 90);
        assert!((summary.roi - 4.0).abs() < 1e-12);
        assert_eq!(summary.days_remaining, 2);
        let countdown = summary.countdown.unwrap();
        assert_eq!(countdown.label, "2 days left");
        assert_eq!(countdown.urgency, UrgencyTier::Warning);
        assert!(!summary.overdue);
        assert_eq!(summary.targeting.unwrap().summary(), "DevTools buyers");
    }

    #[test]
    fn test_overdue_summary_has_no_countdown() {
        let profiles = profiles();
        let rec = record("exp-1", -1, ExperimentStatus::Active);
        let summary = summarize(&rec, &profiles, now(), &ScoringConfig::default());
        assert!(summary.overdue);
        assert!(summary.countdown.is_none());
    }

    #[test]
    fn test_dashboard_stats() {
        let records = vec![
            record("a", 3, ExperimentStatus::Active),
            record("b", -3, ExperimentStatus::Active),
            record("c", -3, ExperimentStatus::Paused),
            record("d", -3, ExperimentStatus::Completed),
            record("e", 3, ExperimentStatus::Unknown),
        ];
        let stats = dashboard_stats(&records, now(), &ScoringConfig::default());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.paused, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.unknown, 1);
        assert_eq!(stats.overdue, 1);
        assert!((stats.average_score - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dashboard() {
        let stats = dashboard_stats(&Vec::<ExperimentRecord>::new(), now(), &ScoringConfig::default());
        assert_eq!(stats, DashboardStats::default());
    }
}
