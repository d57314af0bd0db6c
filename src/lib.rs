//! # outreach-metrics: Success Scoring for Outreach Experiments
//!
//! Derived values for a marketing-experiment dashboard: a weighted success
//! score with a qualitative tier, ROI, and end-date countdown / overdue
//! state. Everything is a pure function of an [`experiment::ExperimentRecord`]
//! snapshot and an explicit `now`; no wall clock is read and nothing is
//! cached between calls.
//!
//! ## Modules
//!
//! - [`date_window`]: calendar-day distance, countdown labels, urgency, overdue
//! - [`scoring`]: primary/secondary/efficiency breakdown, success tier, ROI
//! - [`experiment`]: record schema, targeting resolution, channel metrics,
//!   in-memory repository
//! - [`summary`]: one-call card and dashboard views
//! - [`config`]: tunable weights, thresholds and constants
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use outreach_metrics::date_window::{is_overdue, should_show_countdown};
//! use outreach_metrics::experiment::ExperimentRecord;
//! use outreach_metrics::scoring::compute_success;
//!
//! let now = Utc.with_ymd_and_hms(2024, 2, 12, 14, 0, 0).unwrap();
//! let record = ExperimentRecord::builder("exp-1", "Webinar follow-up", now - Duration::days(3), now + Duration::days(4))
//!     .build();
//!
//! assert!(should_show_countdown(record.end_date(), now));
//! assert!(!is_overdue(record.status(), record.end_date(), now));
//! let report = compute_success(&record, now);
//! assert!(report.score <= 100);
//! ```
//!
//! ## Demos
//!
//! Runnable samples live in `demos/` rather than `examples/` and are declared
//! as `[[example]]` targets in `Cargo.toml`:
//!
//! ```text
//! cargo run --example dashboard_snapshot
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod date_window;
pub mod error;
pub mod experiment;
pub mod logging;
pub mod scoring;
pub mod summary;

pub use error::{Error, Result};
