//! Single-condition evaluation against a contributor's metric snapshot.
//!
//! Evaluation never throws: anything that prevents a comparison — a
//! missing metric, an empty population for a percentile threshold, an
//! out-of-range rank that slipped past parsing — fails closed. The
//! contributor simply does not match. [`evaluate_detailed`] exposes the
//! reason so callers can count fallbacks for diagnosability.

use cohort_core::types::{MetricSnapshot, MetricType, PopulationSnapshot};

use crate::stats::percentile;

use super::types::{Condition, ConditionValue};

/// Why a condition fell back to "no match".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallbackReason {
    /// The contributor's snapshot has no value for the metric.
    MissingMetric(MetricType),
    /// No population values exist to derive a percentile threshold from.
    EmptyPopulation(MetricType),
    /// The stored percentile rank is outside 0-100 (possible when data
    /// arrives through deserialization rather than the typed parser).
    UnusableRank(f64),
}

/// Typed outcome of a single condition evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalOutcome {
    Matched,
    NotMatched,
    /// Fail-closed: treated as "not matched", silent at this layer.
    FailedClosed(FallbackReason),
}

impl EvalOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched)
    }
}

/// Evaluate one condition. Fail-closed outcomes collapse to `false`.
pub fn evaluate(
    condition: &Condition,
    metrics: &MetricSnapshot,
    population: &PopulationSnapshot,
) -> bool {
    evaluate_detailed(condition, metrics, population).is_match()
}

/// Evaluate one condition, keeping the fallback reason visible.
pub fn evaluate_detailed(
    condition: &Condition,
    metrics: &MetricSnapshot,
    population: &PopulationSnapshot,
) -> EvalOutcome {
    let Some(observed) = metrics.get(condition.metric) else {
        tracing::debug!(
            condition = %condition.id,
            metric = %condition.metric,
            "metric missing from snapshot; condition fails closed"
        );
        return EvalOutcome::FailedClosed(FallbackReason::MissingMetric(condition.metric));
    };

    let threshold = match condition.value {
        ConditionValue::Raw { number } => number,
        ConditionValue::Percentile { rank } => {
            let Some(values) = population.values(condition.metric) else {
                return EvalOutcome::FailedClosed(FallbackReason::EmptyPopulation(
                    condition.metric,
                ));
            };
            match percentile(values, rank) {
                Some(threshold) => threshold,
                None if values.is_empty() => {
                    return EvalOutcome::FailedClosed(FallbackReason::EmptyPopulation(
                        condition.metric,
                    ))
                }
                None => {
                    tracing::debug!(
                        condition = %condition.id,
                        rank,
                        "unusable percentile rank; condition fails closed"
                    );
                    return EvalOutcome::FailedClosed(FallbackReason::UnusableRank(rank));
                }
            }
        }
    };

    if condition.operator.apply(observed, threshold) {
        EvalOutcome::Matched
    } else {
        EvalOutcome::NotMatched
    }
}
