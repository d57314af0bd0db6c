//! Success criteria - what an experiment is trying to achieve

use serde::{Deserialize, Serialize};

use super::metric_set::{metric_keys, MetricSet};

/// The single outcome an experiment is judged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryGoal {
    /// Book meetings.
    Meetings,
    /// Generate leads.
    Leads,
    /// Generate revenue.
    Revenue,
    /// Drive responses.
    Engagement,
    /// Drive impressions.
    Awareness,
    /// Unrecognized goal value.
    #[serde(other)]
    Unknown,
}

impl PrimaryGoal {
    /// Metric that measures progress toward this goal.
    ///
    /// `Unknown` has no metric and therefore never scores.
    #[must_use]
    pub const fn metric_key(self) -> Option<&'static str> {
        match self {
            Self::Meetings => Some(metric_keys::MEETINGS_BOOKED),
            Self::Leads => Some(metric_keys::LEADS_GENERATED),
            Self::Revenue => Some(metric_keys::REVENUE_GENERATED),
            Self::Engagement => Some(metric_keys::RESPONSE_RATE),
            Self::Awareness => Some(metric_keys::IMPRESSIONS),
            Self::Unknown => None,
        }
    }
}

/// Success criteria attached to an experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCriteria {
    /// Goal the experiment is scored on.
    pub primary_goal: PrimaryGoal,
    /// Planned duration in days.
    pub time_frame: u32,
    /// Sparse metric targets.
    #[serde(default)]
    pub target_metrics: MetricSet,
    /// Free-text secondary goals, without numeric targets.
    #[serde(default)]
    pub secondary_goals: Vec<String>,
    /// Percent of a target that counts as success (0-100).
    #[serde(default = "default_success_threshold")]
    pub success_threshold: f64,
}

const fn default_success_threshold() -> f64 {
    100.0
}

impl SuccessCriteria {
    /// Criteria with no targets, no secondary goals and a 100% threshold.
    #[must_use]
    pub fn new(primary_goal: PrimaryGoal, time_frame: u32) -> Self {
        Self {
            primary_goal,
            time_frame,
            target_metrics: MetricSet::new(),
            secondary_goals: Vec::new(),
            success_threshold: default_success_threshold(),
        }
    }

    /// Add a metric target.
    #[must_use]
    pub fn with_target(mut self, key: impl Into<String>, target: f64) -> Self {
        self.target_metrics.set(key, target);
        self
    }

    /// Add a secondary goal.
    #[must_use]
    pub fn with_secondary_goal(mut self, goal: impl Into<String>) -> Self {
        self.secondary_goals.push(goal.into());
        self
    }

    /// Set the success threshold percentage.
    #[must_use]
    pub const fn with_success_threshold(mut self, threshold: f64) -> Self {
        self.success_threshold = threshold;
        self
    }

    /// Target for the primary goal's metric, if one is set.
    #[must_use]
    pub fn primary_target(&self) -> Option<f64> {
        self.primary_goal
            .metric_key()
            .and_then(|key| self.target_metrics.get(key))
    }
}

impl Default for SuccessCriteria {
    fn default() -> Self {
        Self::new(PrimaryGoal::Meetings, 30)
    }
}
