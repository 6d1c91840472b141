//! Host integration traits.
//!
//! The engine never computes metrics; the host supplies them through
//! [`MetricSource`] and the engine only evaluates rules against the
//! snapshots it gets back.

use cohort_core::types::{
    ContributorId, DateRange, MetricSnapshot, MetricType, PopulationSnapshot, WorkflowStep,
};

/// Supplies contributor and population metrics for a date range.
///
/// Implementations typically sit in front of a warehouse or reporting
/// store. Returning `None` for a contributor means no data; every
/// condition over that contributor then fails closed.
pub trait MetricSource: Send + Sync {
    fn contributor_metrics(
        &self,
        contributor: &ContributorId,
        range: DateRange,
    ) -> Option<MetricSnapshot>;

    /// The distribution of `metric` across all contributors active at
    /// `step` within `range`. An empty vec means no population data;
    /// percentile conditions over it fail closed.
    fn population_values(
        &self,
        step: WorkflowStep,
        metric: MetricType,
        range: DateRange,
    ) -> Vec<f64>;
}

/// Materialize a full population snapshot for one step and range,
/// covering every metric a condition could reference.
pub fn population_snapshot(
    source: &dyn MetricSource,
    step: WorkflowStep,
    range: DateRange,
) -> PopulationSnapshot {
    MetricType::all()
        .iter()
        .map(|&metric| (metric, source.population_values(step, metric, range)))
        .collect()
}
