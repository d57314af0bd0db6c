//! Dashboard Snapshot Example
//!
//! Loads experiments from JSON, applies a metrics update through the store
//! and prints each card's derived values.
//!
//! Run with: RUST_LOG=debug cargo run --example dashboard_snapshot

use anyhow::Context;
use chrono::{DateTime, Utc};
use outreach_metrics::config::ScoringConfig;
use outreach_metrics::experiment::{
    metric_keys, ExperimentRecord, ExperimentRepository, ExperimentStore, IcpProfile, MetricSet,
};
use outreach_metrics::logging::init_tracing;
use outreach_metrics::summary::{dashboard_stats, summarize};

const PROFILES: &str = r#"[
    { "id": "icp-fin", "name": "Finance leaders", "jobTitles": ["CFO", "VP Finance"] }
]"#;

const EXPERIMENTS: &str = r#"[
    {
        "id": "exp-1",
        "name": "CFO cold email",
        "status": "active",
        "createdAt": "2024-05-01T09:00:00Z",
        "startedAt": "2024-05-02T09:00:00Z",
        "endDate": "2024-05-22T17:00:00Z",
        "icpProfileId": "icp-fin",
        "successCriteria": {
            "primaryGoal": "meetings",
            "timeFrame": 20,
            "targetMetrics": { "meetingsBooked": 10, "responseRate": 10 },
            "secondaryGoals": ["Response rate above target"],
            "successThreshold": 80
        },
        "metrics": { "meetingsBooked": 4, "responseRate": 9 },
        "distributionChannel": "Email Outreach"
    },
    {
        "id": "exp-2",
        "name": "Webinar promo",
        "status": "active",
        "createdAt": "2024-04-01T09:00:00Z",
        "endDate": "2024-05-10T17:00:00Z",
        "targetAudience": "Ops managers",
        "successCriteria": {
            "primaryGoal": "leads",
            "timeFrame": 40,
            "targetMetrics": { "leadsGenerated": 60 }
        },
        "metrics": { "leadsGenerated": 22 },
        "distributionChannel": "Partner Webinar"
    }
]"#;

fn main() -> anyhow::Result<()> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    init_tracing(&level);

    let now: DateTime<Utc> = "2024-05-12T10:00:00Z".parse().context("parsing demo clock")?;
    let config = ScoringConfig::default();
    let profiles: Vec<IcpProfile> = serde_json::from_str(PROFILES).context("parsing profiles")?;
    let records: Vec<ExperimentRecord> =
        serde_json::from_str(EXPERIMENTS).context("parsing experiments")?;

    let mut store = ExperimentStore::new().with_value_per_meeting(config.value_per_meeting);
    for record in records {
        store.insert(record)?;
    }

    store.update_metrics(
        "exp-1",
        MetricSet::new()
            .with(metric_keys::MEETINGS_BOOKED, 6.0)
            .with(metric_keys::RESPONSE_RATE, 11.0)
            .with(metric_keys::COST, 4_800.0),
    )?;

    println!("=== Experiments as of {now} ===\n");
    for record in store.list() {
        let card = summarize(record, &profiles, now, &config);
        println!("{} [{}]", record.name(), record.status());
        println!(
            "   score {} ({:?})  primary {:.0} / secondary {:.0} / efficiency {:.0}",
            card.success.score,
            card.success.status,
            card.success.breakdown.primary_goal,
            card.success.breakdown.secondary_goals,
            card.success.breakdown.efficiency,
        );
        println!("   ROI {:.2}x", card.roi);
        if let Some(countdown) = &card.countdown {
            println!("   {} ({:?})", countdown.label, countdown.urgency);
        }
        if card.overdue {
            println!("   OVERDUE by {} days", -card.days_remaining);
        }
        if let Some(targeting) = card.targeting {
            println!("   targeting: {}", targeting.summary());
        }
        println!();
    }

    let stats = dashboard_stats(store.list(), now, &config);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
