//! Dashboard flow tests: repository updates feeding the derived views

use chrono::{DateTime, Duration, TimeZone, Utc};
use outreach_metrics::config::ScoringConfig;
use outreach_metrics::experiment::{
    metric_keys, ChannelCategory, ExperimentFilter, ExperimentRecord, ExperimentRepository,
    ExperimentStatus, ExperimentStore, IcpProfile, MetricSet, PrimaryGoal, ResolvedTargeting,
    SuccessCriteria,
};
use outreach_metrics::scoring::SuccessStatus;
use outreach_metrics::summary::{dashboard_stats, summarize};
use outreach_metrics::Error;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 20, 11, 0, 0).unwrap()
}

fn profiles() -> Vec<IcpProfile> {
    vec![IcpProfile {
        id: "icp-ops".into(),
        name: "RevOps leaders".into(),
        job_titles: vec!["Head of RevOps".into()],
        industries: vec!["B2B SaaS".into()],
        company_sizes: vec!["201-500".into()],
        pain_points: vec!["Pipeline visibility".into()],
    }]
}

fn seed(repo: &mut dyn ExperimentRepository) {
    let start = now() - Duration::days(10);
    repo.insert(
        ExperimentRecord::builder("li-1", "RevOps LinkedIn DMs", start, now() + Duration::days(10))
            .started_at(start)
            .icp_profile_id("icp-ops")
            .distribution_channel("LinkedIn")
            .success_criteria(
                SuccessCriteria::new(PrimaryGoal::Meetings, 20)
                    .with_target(metric_keys::MEETINGS_BOOKED, 10.0),
            )
            .build(),
    )
    .unwrap();
    repo.insert(
        ExperimentRecord::builder("mail-1", "Renewal nudges", start, now() - Duration::days(2))
            .started_at(start)
            .icp_profile_id("icp-gone")
            .distribution_channel("Email Outreach")
            .success_criteria(
                SuccessCriteria::new(PrimaryGoal::Leads, 8)
                    .with_target(metric_keys::LEADS_GENERATED, 40.0),
            )
            .metrics(MetricSet::new().with(metric_keys::LEADS_GENERATED, 10.0))
            .build(),
    )
    .unwrap();
    repo.insert(
        ExperimentRecord::builder("ads-1", "Retargeting", start, now() + Duration::days(1))
            .distribution_channel("Google Ads")
            .target_audience("Site visitors, last 30 days")
            .success_criteria(
                SuccessCriteria::new(PrimaryGoal::Awareness, 11)
                    .with_target(metric_keys::IMPRESSIONS, 100_000.0),
            )
            .build(),
    )
    .unwrap();
}

#[test]
fn test_metrics_update_flows_into_summary() {
    let mut store = ExperimentStore::new();
    seed(&mut store);
    let profiles = profiles();
    let config = ScoringConfig::default();

    let before = summarize(store.get("li-1").unwrap(), &profiles, now(), &config);
    assert_eq!(before.success.score, 30);
    assert!(before.roi.abs() < f64::EPSILON);

    store
        .update_metrics(
            "li-1",
            MetricSet::new()
                .with(metric_keys::MEETINGS_BOOKED, 8.0)
                .with(metric_keys::COST, 7200.0),
        )
        .unwrap();

    let record = store.get("li-1").unwrap();
    assert_eq!(record.metrics().get(metric_keys::ROI), Some(8.0));

    let after = summarize(record, &profiles, now(), &config);
    assert_eq!(after.success.score, 90);
    assert_eq!(after.success.status, SuccessStatus::Excellent);
    assert!((after.roi - 8.0).abs() < 1e-12);
    assert!(matches!(after.targeting, Some(ResolvedTargeting::Profile(p)) if p.id == "icp-ops"));
}

#[test]
fn test_overdue_until_completed() {
    let mut store = ExperimentStore::new();
    seed(&mut store);
    let profiles = profiles();
    let config = ScoringConfig::default();

    let overdue = store.filter(&ExperimentFilter::new().overdue_only(), now());
    assert_eq!(overdue.len(), 1);
    let summary = summarize(overdue[0], &profiles, now(), &config);
    assert!(summary.overdue);
    assert_eq!(summary.targeting, Some(ResolvedTargeting::MissingProfile("icp-gone")));

    store.complete("mail-1", now()).unwrap();
    assert!(store
        .filter(&ExperimentFilter::new().overdue_only(), now())
        .is_empty());

    let err = store
        .update_status("mail-1", ExperimentStatus::Active)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTransition { .. }));
}

#[test]
fn test_dashboard_stats_over_store() {
    let mut store = ExperimentStore::new();
    seed(&mut store);
    store.update_status("ads-1", ExperimentStatus::Paused).unwrap();

    let stats = dashboard_stats(store.list(), now(), &ScoringConfig::default());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.paused, 1);
    assert_eq!(stats.overdue, 1);
}

#[test]
fn test_countdown_for_ending_soon() {
    let mut store = ExperimentStore::new();
    seed(&mut store);
    let profiles = profiles();

    let ads = summarize(store.get("ads-1").unwrap(), &profiles, now(), &ScoringConfig::default());
    let countdown = ads.countdown.expect("ends tomorrow");
    assert_eq!(countdown.label, "Ends tomorrow");
    assert_eq!(
        ads.targeting.map(|t| t.summary()),
        Some("Site visitors, last 30 days".to_string())
    );

    let paid = store.filter(&ExperimentFilter::new().channel(ChannelCategory::PaidAds), now());
    assert_eq!(paid.len(), 1);
}
