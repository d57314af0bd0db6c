//! Experiment Record - root entity of the dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CustomTargeting, ExperimentStatus, MetricSet, SuccessCriteria};
use crate::{Error, Result};

/// Experiment Record represents one tracked outreach campaign.
///
/// Records are owned by the caller (or an [`super::ExperimentRepository`]).
/// Scoring functions take a shared reference and never write back; derived
/// values are recomputed on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentRecord {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: ExperimentStatus,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    started_at: Option<DateTime<Utc>>,
    end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icp_profile_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_targeting: Option<CustomTargeting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_audience: Option<String>,
    #[serde(default)]
    success_criteria: SuccessCriteria,
    #[serde(default)]
    metrics: MetricSet,
    #[serde(default)]
    distribution_channel: String,
}

impl ExperimentRecord {
    /// Create a builder. Timestamps are explicit so records are reproducible.
    #[must_use]
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> ExperimentRecordBuilder {
        ExperimentRecordBuilder::new(id, name, created_at, end_date)
    }

    /// Get the experiment ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ExperimentStatus {
        self.status
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the start timestamp, if the experiment was explicitly started.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// When the experiment began: `started_at`, falling back to `created_at`.
    #[must_use]
    pub fn effective_start(&self) -> DateTime<Utc> {
        self.started_at.unwrap_or(self.created_at)
    }

    /// Get the planned end date.
    #[must_use]
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Get the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Get the referenced ICP profile ID, if any.
    #[must_use]
    pub fn icp_profile_id(&self) -> Option<&str> {
        self.icp_profile_id.as_deref()
    }

    /// Get the inline custom targeting, if any.
    #[must_use]
    pub const fn custom_targeting(&self) -> Option<&CustomTargeting> {
        self.custom_targeting.as_ref()
    }

    /// Get the legacy free-text audience, if any.
    #[must_use]
    pub fn target_audience(&self) -> Option<&str> {
        self.target_audience.as_deref()
    }

    /// Get the success criteria.
    #[must_use]
    pub const fn success_criteria(&self) -> &SuccessCriteria {
        &self.success_criteria
    }

    /// Get the current metrics.
    #[must_use]
    pub const fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    /// Get the distribution channel label.
    #[must_use]
    pub fn distribution_channel(&self) -> &str {
        &self.distribution_channel
    }

    /// Check the record invariants enforced at the store boundary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] if the ID is blank, the time frame is
    /// zero, the success threshold is outside 0..=100, or `completed_at` is
    /// set on a record that is not completed.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidRecord("id must not be empty".to_string()));
        }
        if self.success_criteria.time_frame == 0 {
            return Err(Error::InvalidRecord(format!(
                "{}: time frame must be at least one day",
                self.id
            )));
        }
        let threshold = self.success_criteria.success_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(Error::InvalidRecord(format!(
                "{}: success threshold {threshold} is outside 0..=100",
                self.id
            )));
        }
        if self.completed_at.is_some() && self.status != ExperimentStatus::Completed {
            return Err(Error::InvalidRecord(format!(
                "{}: completedAt set but status is {}",
                self.id, self.status
            )));
        }
        Ok(())
    }

    pub(crate) fn set_status(&mut self, status: ExperimentStatus) {
        self.status = status;
    }

    pub(crate) fn set_metrics(&mut self, metrics: MetricSet) {
        self.metrics = metrics;
    }

    pub(crate) fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.status = ExperimentStatus::Completed;
        self.completed_at = Some(at);
    }
}

/// Builder for `ExperimentRecord`.
#[derive(Debug)]
pub struct ExperimentRecordBuilder {
    record: ExperimentRecord,
}

impl ExperimentRecordBuilder {
    /// Create a new builder with required fields. Status starts `Active`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            record: ExperimentRecord {
                id: id.into(),
                name: name.into(),
                description: None,
                status: ExperimentStatus::Active,
                created_at,
                started_at: None,
                end_date,
                completed_at: None,
                icp_profile_id: None,
                custom_targeting: None,
                target_audience: None,
                success_criteria: SuccessCriteria::default(),
                metrics: MetricSet::new(),
                distribution_channel: String::new(),
            },
        }
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = Some(description.into());
        self
    }

    /// Set the initial status.
    #[must_use]
    pub const fn status(mut self, status: ExperimentStatus) -> Self {
        self.record.status = status;
        self
    }

    /// Set the start timestamp.
    #[must_use]
    pub const fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.record.started_at = Some(started_at);
        self
    }

    /// Set the completion timestamp.
    #[must_use]
    pub const fn completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.record.completed_at = Some(completed_at);
        self
    }

    /// Reference an ICP profile.
    #[must_use]
    pub fn icp_profile_id(mut self, id: impl Into<String>) -> Self {
        self.record.icp_profile_id = Some(id.into());
        self
    }

    /// Set inline custom targeting.
    #[must_use]
    pub fn custom_targeting(mut self, targeting: CustomTargeting) -> Self {
        self.record.custom_targeting = Some(targeting);
        self
    }

    /// Set the legacy free-text audience.
    #[must_use]
    pub fn target_audience(mut self, audience: impl Into<String>) -> Self {
        self.record.target_audience = Some(audience.into());
        self
    }

    /// Set the success criteria.
    #[must_use]
    pub fn success_criteria(mut self, criteria: SuccessCriteria) -> Self {
        self.record.success_criteria = criteria;
        self
    }

    /// Set the current metrics.
    #[must_use]
    pub fn metrics(mut self, metrics: MetricSet) -> Self {
        self.record.metrics = metrics;
        self
    }

    /// Set the distribution channel label.
    #[must_use]
    pub fn distribution_channel(mut self, channel: impl Into<String>) -> Self {
        self.record.distribution_channel = channel.into();
        self
    }

    /// Build the `ExperimentRecord`. Call [`ExperimentRecord::validate`] to
    /// check invariants.
    #[must_use]
    pub fn build(self) -> ExperimentRecord {
        self.record
    }
}
