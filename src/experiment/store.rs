//! Experiment Store - in-memory repository for experiment records
//!
//! The dashboard holds its experiments as a flat list. This module provides
//! the repository seam the scoring layer is fed from, and an in-memory
//! implementation that keeps insertion order.

use chrono::{DateTime, Utc};

use super::{ChannelCategory, ExperimentRecord, ExperimentStatus, MetricSet, PrimaryGoal};
use crate::config::VALUE_PER_MEETING;
use crate::date_window::is_overdue;
use crate::scoring::sync_roi;
use crate::{Error, Result};

/// Storage operations for experiment records.
///
/// Updates replace whole fields; the store never derives scores.
pub trait ExperimentRepository {
    /// Add a validated record.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRecord`] if validation fails, [`Error::DuplicateId`]
    /// if the ID is taken.
    fn insert(&mut self, record: ExperimentRecord) -> Result<()>;

    /// Get a record by ID.
    fn get(&self, id: &str) -> Option<&ExperimentRecord>;

    /// All records, in insertion order.
    fn list(&self) -> Vec<&ExperimentRecord>;

    /// Change a record's status.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for an unknown ID, [`Error::InvalidTransition`]
    /// when leaving a terminal state.
    fn update_status(&mut self, id: &str, status: ExperimentStatus) -> Result<()>;

    /// Replace a record's metrics. The derived `roi` metric is re-synced.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for an unknown ID.
    fn update_metrics(&mut self, id: &str, metrics: MetricSet) -> Result<()>;

    /// Mark a record completed at `now`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for an unknown ID, [`Error::InvalidTransition`]
    /// if the record already failed.
    fn complete(&mut self, id: &str, now: DateTime<Utc>) -> Result<()>;

    /// Remove and return a record.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for an unknown ID.
    fn delete(&mut self, id: &str) -> Result<ExperimentRecord>;

    /// Records matching `filter` as of `now`, in insertion order.
    fn filter(&self, filter: &ExperimentFilter, now: DateTime<Utc>) -> Vec<&ExperimentRecord> {
        self.list()
            .into_iter()
            .filter(|record| filter.matches(record, now))
            .collect()
    }
}

/// In-memory store for experiment records.
#[derive(Debug)]
pub struct ExperimentStore {
    experiments: Vec<ExperimentRecord>,
    value_per_meeting: f64,
}

impl Default for ExperimentStore {
    fn default() -> Self {
        Self {
            experiments: Vec::new(),
            value_per_meeting: VALUE_PER_MEETING,
        }
    }
}

impl ExperimentStore {
    /// Create a new empty experiment store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a non-default value per meeting when syncing ROI.
    #[must_use]
    pub const fn with_value_per_meeting(mut self, value_per_meeting: f64) -> Self {
        self.value_per_meeting = value_per_meeting;
        self
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Get the number of experiments in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut ExperimentRecord> {
        self.experiments
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

impl ExperimentRepository for ExperimentStore {
    fn insert(&mut self, record: ExperimentRecord) -> Result<()> {
        record.validate()?;
        if self.get(record.id()).is_some() {
            return Err(Error::DuplicateId(record.id().to_string()));
        }
        if record.status() == ExperimentStatus::Unknown {
            tracing::warn!(
                event = "status.unknown",
                experiment_id = record.id(),
                "unrecognized status; record is never active or overdue"
            );
        }
        if record.success_criteria().primary_goal == PrimaryGoal::Unknown {
            tracing::warn!(
                event = "primary_goal.unknown",
                experiment_id = record.id(),
                "unrecognized primary goal; primary score is zero"
            );
        }
        tracing::info!(event = "experiment.insert", experiment_id = record.id());
        self.experiments.push(record);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<&ExperimentRecord> {
        self.experiments.iter().find(|record| record.id() == id)
    }

    fn list(&self) -> Vec<&ExperimentRecord> {
        self.experiments.iter().collect()
    }

    fn update_status(&mut self, id: &str, status: ExperimentStatus) -> Result<()> {
        let record = self.get_mut(id)?;
        let from = record.status();
        if !from.can_transition_to(status) {
            return Err(Error::InvalidTransition { from, to: status });
        }
        record.set_status(status);
        tracing::info!(
            event = "experiment.status",
            experiment_id = id,
            from = %from,
            to = %status
        );
        Ok(())
    }

    fn update_metrics(&mut self, id: &str, mut metrics: MetricSet) -> Result<()> {
        let value_per_meeting = self.value_per_meeting;
        let record = self.get_mut(id)?;
        let roi = sync_roi(&mut metrics, value_per_meeting);
        record.set_metrics(metrics);
        tracing::info!(event = "experiment.metrics", experiment_id = id, roi = ?roi);
        Ok(())
    }

    fn complete(&mut self, id: &str, now: DateTime<Utc>) -> Result<()> {
        let record = self.get_mut(id)?;
        let from = record.status();
        if !from.can_transition_to(ExperimentStatus::Completed) {
            return Err(Error::InvalidTransition {
                from,
                to: ExperimentStatus::Completed,
            });
        }
        if from == ExperimentStatus::Completed {
            return Ok(());
        }
        record.mark_completed(now);
        tracing::info!(event = "experiment.complete", experiment_id = id);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<ExperimentRecord> {
        let index = self
            .experiments
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        tracing::info!(event = "experiment.delete", experiment_id = id);
        Ok(self.experiments.remove(index))
    }
}

/// Criteria for narrowing the experiment list. Unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentFilter {
    /// Exact status.
    pub status: Option<ExperimentStatus>,
    /// Channel category of the record's distribution channel.
    pub channel: Option<ChannelCategory>,
    /// Primary goal.
    pub primary_goal: Option<PrimaryGoal>,
    /// Case-insensitive text searched in name, description, channel and
    /// legacy audience.
    pub search: Option<String>,
    /// Only overdue experiments.
    pub overdue_only: bool,
}

impl ExperimentFilter {
    /// Match-everything filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a status.
    #[must_use]
    pub const fn status(mut self, status: ExperimentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to a channel category.
    #[must_use]
    pub const fn channel(mut self, channel: ChannelCategory) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Restrict to a primary goal.
    #[must_use]
    pub const fn primary_goal(mut self, goal: PrimaryGoal) -> Self {
        self.primary_goal = Some(goal);
        self
    }

    /// Restrict to records containing `text`.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Restrict to overdue records.
    #[must_use]
    pub const fn overdue_only(mut self) -> Self {
        self.overdue_only = true;
        self
    }

    /// Whether `record` passes every set criterion as of `now`.
    #[must_use]
    pub fn matches(&self, record: &ExperimentRecord, now: DateTime<Utc>) -> bool {
        if self.status.is_some_and(|s| s != record.status()) {
            return false;
        }
        if self
            .channel
            .is_some_and(|c| c != ChannelCategory::classify(record.distribution_channel()))
        {
            return false;
        }
        if self
            .primary_goal
            .is_some_and(|g| g != record.success_criteria().primary_goal)
        {
            return false;
        }
        if self.overdue_only && !is_overdue(record.status(), record.end_date(), now) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => search_matches(record, &needle.to_lowercase()),
            _ => true,
        }
    }
}

fn search_matches(record: &ExperimentRecord, needle: &str) -> bool {
    [
        Some(record.name()),
        record.description(),
        Some(record.distribution_channel()),
        record.target_audience(),
    ]
    .into_iter()
    .flatten()
    .any(|haystack| haystack.to_lowercase().contains(needle))
}
