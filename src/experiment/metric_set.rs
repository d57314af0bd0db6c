//! Metric Set - sparse metric-name to value mapping
//!
//! Used both for an experiment's current metrics and for the target values
//! in its success criteria. Which keys are present depends on the channel
//! and the primary goal; an absent key means "not applicable", never zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known metric names, in the camelCase form stored on records.
pub mod metric_keys {
    /// Meetings booked.
    pub const MEETINGS_BOOKED: &str = "meetingsBooked";
    /// Leads generated.
    pub const LEADS_GENERATED: &str = "leadsGenerated";
    /// Revenue attributed to the experiment.
    pub const REVENUE_GENERATED: &str = "revenueGenerated";
    /// Response rate (percent).
    pub const RESPONSE_RATE: &str = "responseRate";
    /// Ad or post impressions.
    pub const IMPRESSIONS: &str = "impressions";
    /// Clicks.
    pub const CLICKS: &str = "clicks";
    /// Conversion rate (percent).
    pub const CONVERSION_RATE: &str = "conversionRate";
    /// Engagement rate (percent).
    pub const ENGAGEMENT_RATE: &str = "engagementRate";
    /// Emails sent.
    pub const EMAILS_SENT: &str = "emailsSent";
    /// Email open rate (percent).
    pub const OPEN_RATE: &str = "openRate";
    /// Connection requests sent.
    pub const CONNECTIONS_SENT: &str = "connectionsSent";
    /// Connection acceptance rate (percent).
    pub const ACCEPTANCE_RATE: &str = "acceptanceRate";
    /// Event attendees.
    pub const ATTENDEES: &str = "attendees";
    /// Total spend.
    pub const COST: &str = "cost";
    /// Derived return on investment, kept in sync from meetings and cost.
    pub const ROI: &str = "roi";
}

/// Sparse mapping of metric name to numeric value.
///
/// Keys are ordered so iteration (and serialization) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSet {
    values: BTreeMap<String, f64>,
}

impl MetricSet {
    /// Create an empty metric set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a metric value, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Get a metric value, treating an absent key as zero.
    #[must_use]
    pub fn value_or_zero(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    /// Whether the key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Set a metric value, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(key.into(), value)
    }

    /// Builder-style [`MetricSet::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Metric names in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Whether no metrics are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for MetricSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
