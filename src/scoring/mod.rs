//! Success Engine
//!
//! Pure functions deriving a weighted success score, a status tier and ROI
//! from an experiment's criteria and metrics. Nothing is cached: callers
//! recompute on every render from the current record snapshot.
//!
//! ## Score composition
//!
//! ```text
//! score = round(0.5 * min(primary, 100) + 0.3 * secondary + 0.2 * efficiency)
//!
//! primary     actual / target of the primary-goal metric, 0..=150
//! secondary   share of secondary goals met (100 when none declared)
//! efficiency  pace against the time frame, 0..=100
//! ```
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use outreach_metrics::experiment::{metric_keys, ExperimentRecord, MetricSet, PrimaryGoal, SuccessCriteria};
//! use outreach_metrics::scoring::{compute_roi, compute_success, SuccessStatus};
//!
//! let now = Utc.with_ymd_and_hms(2024, 4, 21, 9, 0, 0).unwrap();
//! let start = now - Duration::days(10);
//! let experiment = ExperimentRecord::builder("exp-7", "Founder-led LinkedIn", start, start + Duration::days(20))
//!     .started_at(start)
//!     .success_criteria(
//!         SuccessCriteria::new(PrimaryGoal::Meetings, 20).with_target(metric_keys::MEETINGS_BOOKED, 10.0),
//!     )
//!     .metrics(MetricSet::new().with(metric_keys::MEETINGS_BOOKED, 8.0))
//!     .build();
//!
//! let report = compute_success(&experiment, now);
//! assert_eq!(report.score, 90);
//! assert_eq!(report.status, SuccessStatus::Excellent);
//! assert!((compute_roi(5.0, 7200.0) - 5.0).abs() < 1e-12);
//! ```

mod roi;
mod secondary;
mod success;

pub use roi::{compute_roi, compute_roi_with, sync_roi};
pub use secondary::secondary_goals_score;
pub use success::{
    compute_success, compute_success_with, efficiency_score, primary_goal_score,
    SuccessBreakdown, SuccessReport, SuccessStatus,
};
