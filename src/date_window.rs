//! Date Window - calendar-day distance to an end date
//!
//! All functions take the current instant explicitly; nothing here reads the
//! wall clock. Both instants are truncated to their UTC calendar date before
//! subtracting, so the results count calendar days, not elapsed hours.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use outreach_metrics::date_window::{countdown_label, days_remaining, urgency_tier, UrgencyTier};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 10, 23, 59, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2024, 6, 11, 0, 1, 0).unwrap();
//!
//! assert_eq!(days_remaining(end, now), 1);
//! assert_eq!(countdown_label(end, now), "Ends tomorrow");
//! assert_eq!(urgency_tier(end, now), UrgencyTier::Warning);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::COUNTDOWN_WINDOW_DAYS;
use crate::experiment::ExperimentStatus;

/// Display emphasis for an approaching end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    /// End date has passed; muted.
    Neutral,
    /// Ends today.
    Critical,
    /// Ends in one or two days.
    Warning,
    /// Ends in three or more days.
    Caution,
}

/// Countdown shown on a card while the end date is near.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// Calendar days until the end date.
    pub days_remaining: i64,
    /// Short label, e.g. "3 days left".
    pub label: String,
    /// Display emphasis.
    pub urgency: UrgencyTier,
}

/// Calendar days from `now` until `end_date`. Negative once the end date has
/// passed, zero on the end date itself.
#[must_use]
pub fn days_remaining(end_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    end_date
        .date_naive()
        .signed_duration_since(now.date_naive())
        .num_days()
}

/// Calendar days from `start` until `now`. Negative if `start` is in the
/// future.
#[must_use]
pub fn days_since(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    -days_remaining(start, now)
}

/// Whether the countdown is visible: `0 <= days_remaining <= 5`.
#[must_use]
pub fn should_show_countdown(end_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    should_show_countdown_within(end_date, now, COUNTDOWN_WINDOW_DAYS)
}

/// [`should_show_countdown`] with a custom window.
#[must_use]
pub fn should_show_countdown_within(
    end_date: DateTime<Utc>,
    now: DateTime<Utc>,
    window_days: i64,
) -> bool {
    (0..=window_days).contains(&days_remaining(end_date, now))
}

/// Label for a day count. Out-of-window counts still get a label but are not
/// meant for display.
#[must_use]
pub fn label_for_days(days: i64) -> String {
    match days {
        d if d < 0 => "Ended".to_string(),
        0 => "Ends today".to_string(),
        1 => "Ends tomorrow".to_string(),
        d => format!("{d} days left"),
    }
}

/// Countdown label for `end_date`. Check [`should_show_countdown`] first.
#[must_use]
pub fn countdown_label(end_date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    label_for_days(days_remaining(end_date, now))
}

/// Urgency tier for a day count.
#[must_use]
pub const fn urgency_for_days(days: i64) -> UrgencyTier {
    match days {
        i64::MIN..=-1 => UrgencyTier::Neutral,
        0 => UrgencyTier::Critical,
        1 | 2 => UrgencyTier::Warning,
        _ => UrgencyTier::Caution,
    }
}

/// Urgency tier for `end_date`.
#[must_use]
pub fn urgency_tier(end_date: DateTime<Utc>, now: DateTime<Utc>) -> UrgencyTier {
    urgency_for_days(days_remaining(end_date, now))
}

/// Countdown for `end_date`, or `None` outside the visibility window.
#[must_use]
pub fn countdown(end_date: DateTime<Utc>, now: DateTime<Utc>, window_days: i64) -> Option<Countdown> {
    let days = days_remaining(end_date, now);
    (0..=window_days).contains(&days).then(|| Countdown {
        days_remaining: days,
        label: label_for_days(days),
        urgency: urgency_for_days(days),
    })
}

/// Whether an experiment is overdue: still active with its end date passed.
///
/// Only `Active` can be overdue. An unrecognized status is never overdue.
#[must_use]
pub fn is_overdue(status: ExperimentStatus, end_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match status {
        ExperimentStatus::Active => days_remaining(end_date, now) < 0,
        ExperimentStatus::Paused | ExperimentStatus::Completed | ExperimentStatus::Failed => false,
        ExperimentStatus::Unknown => {
            tracing::debug!(
                event = "status.unknown",
                "unrecognized experiment status treated as not overdue"
            );
            false
        }
    }
}
