//! Experiment lifecycle status

use serde::{Deserialize, Serialize};

/// Status of an experiment.
///
/// `Completed` and `Failed` are terminal. Unrecognized values read from
/// stored records deserialize to [`ExperimentStatus::Unknown`], which every
/// classifier treats as "not active, not overdue".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    /// Experiment is running.
    Active,
    /// Experiment is on hold and may resume.
    Paused,
    /// Experiment finished.
    Completed,
    /// Experiment was abandoned or missed its goals.
    Failed,
    /// Unrecognized status value.
    #[serde(other)]
    Unknown,
}

impl ExperimentStatus {
    /// Lowercase label, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the status is final.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Whether a record in this status may move to `next`.
    ///
    /// Terminal states never move to a different state, and nothing moves
    /// into `Unknown`. A record stuck in `Unknown` may be repaired to any
    /// known state.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        if next == Self::Unknown {
            return false;
        }
        if self.is_terminal() {
            return self == next;
        }
        true
    }
}

impl std::fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
