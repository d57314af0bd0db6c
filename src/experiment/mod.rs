//! Experiment Record Schema
//!
//! Data structures for outreach experiments as the dashboard stores them.
//! The scoring layer only ever reads these records; mutations go through an
//! [`ExperimentRepository`].
//!
//! ## Schema Overview
//!
//! ```text
//! ExperimentRecord ──> SuccessCriteria ──> MetricSet (targets)
//!        │
//!        ├──> MetricSet (current values, sparse)
//!        └──> Targeting ─ ICP reference ──> IcpProfile
//!                       ─ custom ─────────> CustomTargeting
//!                       ─ legacy text
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use outreach_metrics::experiment::{
//!     metric_keys, ExperimentRecord, ExperimentStatus, MetricSet, PrimaryGoal, SuccessCriteria,
//! };
//!
//! let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2024, 3, 31, 17, 0, 0).unwrap();
//!
//! let experiment = ExperimentRecord::builder("exp-001", "Q1 CFO outreach", created, end)
//!     .distribution_channel("Email Outreach")
//!     .success_criteria(
//!         SuccessCriteria::new(PrimaryGoal::Meetings, 30)
//!             .with_target(metric_keys::MEETINGS_BOOKED, 10.0),
//!     )
//!     .metrics(MetricSet::from_iter([(metric_keys::MEETINGS_BOOKED, 4.0)]))
//!     .build();
//!
//! assert_eq!(experiment.status(), ExperimentStatus::Active);
//! assert!(experiment.validate().is_ok());
//! ```

mod channel;
mod criteria;
mod experiment_record;
mod metric_set;
mod status;
mod store;
mod targeting;

pub use channel::ChannelCategory;
pub use criteria::{PrimaryGoal, SuccessCriteria};
pub use experiment_record::{ExperimentRecord, ExperimentRecordBuilder};
pub use metric_set::{metric_keys, MetricSet};
pub use status::ExperimentStatus;
pub use store::{ExperimentFilter, ExperimentRepository, ExperimentStore};
pub use targeting::{resolve_targeting, CustomTargeting, IcpProfile, ResolvedTargeting, Targeting};
