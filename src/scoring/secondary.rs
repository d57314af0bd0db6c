//! Secondary-goal evaluation
//!
//! Secondary goals are free text with no numeric target of their own. A goal
//! is matched to a metric by keyword: the metric name's leading word (e.g.
//! `meeting` for `meetingsBooked`) must start one of the goal's words. The
//! matched metric then decides whether the goal is met:
//!
//! - with a positive target: actual reaches `target * threshold / 100`
//!   (for `cost`, actual stays at or under the target);
//! - without a target: actual is above zero.
//!
//! Goals that match no metric are unmet.

use std::collections::BTreeSet;

use crate::experiment::{metric_keys, MetricSet, SuccessCriteria};

/// Metrics where lower values are better.
const LOWER_IS_BETTER: &[&str] = &[metric_keys::COST];

/// Percentage (0-100) of declared secondary goals that are met.
///
/// No declared goals scores 100: there is no secondary bar to miss.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn secondary_goals_score(criteria: &SuccessCriteria, metrics: &MetricSet) -> f64 {
    let goals = &criteria.secondary_goals;
    if goals.is_empty() {
        return 100.0;
    }

    let candidates: BTreeSet<&str> = metrics.keys().chain(criteria.target_metrics.keys()).collect();
    let met = goals
        .iter()
        .filter(|goal| {
            matching_metric(goal, &candidates)
                .is_some_and(|key| is_metric_met(key, criteria, metrics))
        })
        .count();

    100.0 * met as f64 / goals.len() as f64
}

/// First metric (in name order) whose stem starts a word of `goal`.
fn matching_metric<'a>(goal: &str, candidates: &BTreeSet<&'a str>) -> Option<&'a str> {
    let goal = goal.to_lowercase();
    let words: Vec<&str> = goal
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    candidates.iter().copied().find(|key| {
        let stem = metric_stem(key);
        !stem.is_empty() && words.iter().any(|w| w.starts_with(&stem))
    })
}

/// Leading word of a camelCase or snake_case metric name, lowercased and
/// with a plural `s` dropped: `meetingsBooked` -> `meeting`.
fn metric_stem(key: &str) -> String {
    let mut stem = String::new();
    for (i, c) in key.chars().enumerate() {
        if c == '_' || (i > 0 && c.is_uppercase()) {
            break;
        }
        stem.extend(c.to_lowercase());
    }
    if stem.len() > 3 && stem.ends_with('s') {
        stem.pop();
    }
    stem
}

fn is_metric_met(key: &str, criteria: &SuccessCriteria, metrics: &MetricSet) -> bool {
    let actual = metrics.get(key);
    match criteria.target_metrics.get(key).filter(|t| *t > 0.0) {
        Some(target) if LOWER_IS_BETTER.contains(&key) => actual.is_some_and(|a| a <= target),
        Some(target) => {
            let threshold = criteria.success_threshold.clamp(0.0, 100.0) / 100.0;
            actual.unwrap_or(0.0) >= target * threshold
        }
        None => actual.is_some_and(|a| a > 0.0),
    }
}
