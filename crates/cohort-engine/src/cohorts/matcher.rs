//! Cohort matching: combines condition results into one boolean.

use cohort_core::types::{MetricSnapshot, PopulationSnapshot};

use crate::conditions::evaluator;

use super::types::Cohort;

/// Does the contributor described by `metrics` belong to `cohort`?
///
/// Conditions combine strictly left to right with the cohort's joiners;
/// there is no operator precedence. A rule set `A OR B AND C` evaluates
/// as `(A OR B) AND C`. This is deliberate and must not be replaced by
/// a precedence-aware expression evaluator.
///
/// Pure function over immutable inputs; safe to call concurrently for
/// different contributors and cohorts.
pub fn matches(
    cohort: &Cohort,
    metrics: &MetricSnapshot,
    population: &PopulationSnapshot,
) -> bool {
    // Explicit rule: an empty rule set matches nothing.
    if cohort.conditions.is_empty() {
        return false;
    }

    if cohort.validate().is_err() {
        // Malformed joiner list; fail closed rather than guess.
        tracing::warn!(
            cohort = %cohort.id,
            conditions = cohort.conditions.len(),
            joiners = cohort.joiners.len(),
            "joiner count does not match condition count; cohort matches nothing"
        );
        return false;
    }

    let mut result = evaluator::evaluate(&cohort.conditions[0], metrics, population);
    for (condition, joiner) in cohort.conditions[1..].iter().zip(cohort.joiners.iter()) {
        let next = evaluator::evaluate(condition, metrics, population);
        result = joiner.combine(result, next);
    }
    result
}
