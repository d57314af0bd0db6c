//! Success engine and date window integration tests
//!
//! Covers the documented behaviors end to end through the public API:
//! countdown window, labels, overdue, ROI, and the weighted success score.

use chrono::{DateTime, Duration, TimeZone, Utc};
use outreach_metrics::config::ScoringConfig;
use outreach_metrics::date_window::{
    countdown_label, days_remaining, is_overdue, should_show_countdown, urgency_tier, UrgencyTier,
};
use outreach_metrics::experiment::{
    metric_keys, ExperimentRecord, ExperimentStatus, MetricSet, PrimaryGoal, SuccessCriteria,
};
use outreach_metrics::scoring::{compute_roi, compute_success, compute_success_with, SuccessStatus};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 4, 16, 45, 0).unwrap()
}

fn days(n: i64) -> DateTime<Utc> {
    now() + Duration::days(n)
}

// =============================================================================
// DateWindow
// =============================================================================

#[test]
fn test_days_remaining_of_same_day_is_zero() {
    assert_eq!(days_remaining(now(), now()), 0);
    let start_of_day = Utc.with_ymd_and_hms(2024, 11, 4, 0, 0, 0).unwrap();
    assert_eq!(days_remaining(start_of_day, now()), 0);
}

#[test]
fn test_countdown_visibility() {
    assert!(!should_show_countdown(days(-1), now()));
    for d in 0..=5 {
        assert!(should_show_countdown(days(d), now()), "day {d}");
    }
    assert!(!should_show_countdown(days(6), now()));
}

#[test]
fn test_countdown_label_shapes() {
    assert_eq!(countdown_label(days(-1), now()), "Ended");
    assert_eq!(countdown_label(days(0), now()), "Ends today");
    assert_eq!(countdown_label(days(1), now()), "Ends tomorrow");
    assert_eq!(countdown_label(days(4), now()), "4 days left");
}

#[test]
fn test_urgency_matches_label_window() {
    assert_eq!(urgency_tier(days(-10), now()), UrgencyTier::Neutral);
    assert_eq!(urgency_tier(days(0), now()), UrgencyTier::Critical);
    assert_eq!(urgency_tier(days(2), now()), UrgencyTier::Warning);
    assert_eq!(urgency_tier(days(5), now()), UrgencyTier::Caution);
}

#[test]
fn test_overdue_rules() {
    assert!(is_overdue(ExperimentStatus::Active, days(-3), now()));
    assert!(!is_overdue(ExperimentStatus::Completed, days(-3), now()));
    assert!(!is_overdue(ExperimentStatus::Active, days(0), now()));
}

// =============================================================================
// ROI
// =============================================================================

#[test]
fn test_roi_edge_cases() {
    assert!(compute_roi(10.0, 0.0).abs() < f64::EPSILON);
    assert!(compute_roi(0.0, 5000.0).abs() < f64::EPSILON);
    assert!((compute_roi(5.0, 7200.0) - 5.0).abs() < 1e-12);
}

// =============================================================================
// SuccessEngine
// =============================================================================

fn experiment(criteria: SuccessCriteria, metrics: MetricSet, started_days_ago: i64) -> ExperimentRecord {
    let start = now() - Duration::days(started_days_ago);
    ExperimentRecord::builder("exp-int", "Integration", start, start + Duration::days(30))
        .started_at(start)
        .success_criteria(criteria)
        .metrics(metrics)
        .build()
}

#[test]
fn test_end_to_end_scenario() {
    let record = experiment(
        SuccessCriteria::new(PrimaryGoal::Meetings, 20)
            .with_target(metric_keys::MEETINGS_BOOKED, 10.0),
        MetricSet::new().with(metric_keys::MEETINGS_BOOKED, 8.0),
        10,
    );
    let report = compute_success(&record, now());

    assert!((report.breakdown.primary_goal - 80.0).abs() < 1e-9);
    assert!((report.breakdown.secondary_goals - 100.0).abs() < f64::EPSILON);
    // pace: 100 * 0.8 / (10 / 20) = 160, clamped to 100
    assert!((report.breakdown.efficiency - 100.0).abs() < 1e-9);
    let expected = (0.5f64 * 80.0 + 0.3 * 100.0 + 0.2 * report.breakdown.efficiency).round();
    assert!((f64::from(report.score) - expected).abs() < f64::EPSILON);
    assert_eq!(report.status, SuccessStatus::Excellent);
}

#[test]
fn test_no_secondary_goals_is_full_secondary_score() {
    for goal in [
        PrimaryGoal::Meetings,
        PrimaryGoal::Leads,
        PrimaryGoal::Revenue,
        PrimaryGoal::Engagement,
        PrimaryGoal::Awareness,
        PrimaryGoal::Unknown,
    ] {
        let record = experiment(SuccessCriteria::new(goal, 14), MetricSet::new(), 3);
        let report = compute_success(&record, now());
        assert!((report.breakdown.secondary_goals - 100.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_missing_primary_target_leaves_secondary_and_efficiency() {
    let record = experiment(
        SuccessCriteria::new(PrimaryGoal::Awareness, 30)
            .with_target(metric_keys::IMPRESSIONS, 0.0),
        MetricSet::new().with(metric_keys::IMPRESSIONS, 12_000.0),
        5,
    );
    let report = compute_success(&record, now());
    assert!(report.breakdown.primary_goal.abs() < f64::EPSILON);

    let expected = (0.3f64 * report.breakdown.secondary_goals + 0.2 * report.breakdown.efficiency).round();
    assert!((f64::from(report.score) - expected).abs() < f64::EPSILON);
}

#[test]
fn test_secondary_goals_reduce_score_when_unmet() {
    let criteria = SuccessCriteria::new(PrimaryGoal::Leads, 20)
        .with_target(metric_keys::LEADS_GENERATED, 50.0)
        .with_target(metric_keys::CONVERSION_RATE, 4.0)
        .with_secondary_goal("Higher conversion rate")
        .with_secondary_goal("Book meetings");
    let metrics = MetricSet::new()
        .with(metric_keys::LEADS_GENERATED, 50.0)
        .with(metric_keys::CONVERSION_RATE, 4.5);
    let report = compute_success(&experiment(criteria, metrics, 10), now());

    // conversion met, meetings unmatched
    assert!((report.breakdown.secondary_goals - 50.0).abs() < 1e-9);
    assert!((report.breakdown.primary_goal - 100.0).abs() < 1e-9);
    assert!((report.breakdown.efficiency - 50.0).abs() < 1e-9);
    // 50 + 15 + 10
    assert_eq!(report.score, 75);
    assert_eq!(report.status, SuccessStatus::Good);
}

#[test]
fn test_custom_thresholds_change_tier_only() {
    let record = experiment(
        SuccessCriteria::new(PrimaryGoal::Meetings, 20)
            .with_target(metric_keys::MEETINGS_BOOKED, 10.0),
        MetricSet::new().with(metric_keys::MEETINGS_BOOKED, 8.0),
        10,
    );
    let strict = ScoringConfig::from_json_str(
        r#"{ "thresholds": { "excellent": 95.0, "good": 80.0, "fair": 50.0 } }"#,
    )
    .unwrap();

    let default_report = compute_success(&record, now());
    let strict_report = compute_success_with(&record, now(), &strict);
    assert_eq!(default_report.score, strict_report.score);
    assert_eq!(strict_report.status, SuccessStatus::Good);
}

#[test]
fn test_compute_success_is_idempotent() {
    let record = experiment(
        SuccessCriteria::new(PrimaryGoal::Engagement, 21)
            .with_target(metric_keys::RESPONSE_RATE, 12.0)
            .with_secondary_goal("More meetings"),
        MetricSet::new()
            .with(metric_keys::RESPONSE_RATE, 7.0)
            .with(metric_keys::MEETINGS_BOOKED, 2.0),
        9,
    );
    let snapshot = record.clone();
    let first = compute_success(&record, now());
    let second = compute_success(&record, now());
    assert_eq!(first, second);
    assert_eq!(record, snapshot);
}
