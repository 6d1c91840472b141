//! Contributor performance metrics.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The closed set of contributor performance metrics a condition can
/// test against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricType {
    TasksSubmitted,
    TasksSkipped,
    TasksRejected,
    TasksAccepted,
    /// Total time taken, in minutes.
    TotalTimeTaken,
    /// Average handling time per task, in minutes.
    AvgHandlingTime,
    /// Accuracy rate in percent (0-100).
    AccuracyRate,
    /// Rejection rate in percent (0-100).
    RejectionRate,
}

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TasksSubmitted => "tasks-submitted",
            Self::TasksSkipped => "tasks-skipped",
            Self::TasksRejected => "tasks-rejected",
            Self::TasksAccepted => "tasks-accepted",
            Self::TotalTimeTaken => "total-time-taken",
            Self::AvgHandlingTime => "avg-handling-time",
            Self::AccuracyRate => "accuracy-rate",
            Self::RejectionRate => "rejection-rate",
        }
    }

    pub fn all() -> &'static [MetricType] {
        &[
            Self::TasksSubmitted,
            Self::TasksSkipped,
            Self::TasksRejected,
            Self::TasksAccepted,
            Self::TotalTimeTaken,
            Self::AvgHandlingTime,
            Self::AccuracyRate,
            Self::RejectionRate,
        ]
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The metric window a cohort's conditions are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    /// Trailing window of N days.
    Days(u32),
    /// No window; all recorded history.
    AllTime,
}

impl Default for DateRange {
    fn default() -> Self {
        Self::Days(30)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(n) => write!(f, "last {n} days"),
            Self::AllTime => f.write_str("all time"),
        }
    }
}

/// A materialized snapshot of one contributor's metric values.
///
/// Produced by the external metric source; the engine never computes
/// metrics itself. A metric absent from the snapshot makes any
/// condition over it fail closed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricSnapshot {
    values: FxHashMap<MetricType, f64>,
}

impl MetricSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: MetricType) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    pub fn set(&mut self, metric: MetricType, value: f64) -> &mut Self {
        self.values.insert(metric, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(MetricType, f64)> for MetricSnapshot {
    fn from_iter<I: IntoIterator<Item = (MetricType, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Per-metric population distributions, used to resolve percentile
/// thresholds at evaluation time.
///
/// Values need not be pre-sorted; percentile resolution sorts a copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    values: FxHashMap<MetricType, Vec<f64>>,
}

impl PopulationSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self, metric: MetricType) -> Option<&[f64]> {
        self.values.get(&metric).map(Vec::as_slice)
    }

    pub fn set(&mut self, metric: MetricType, values: Vec<f64>) -> &mut Self {
        self.values.insert(metric, values);
        self
    }
}

impl FromIterator<(MetricType, Vec<f64>)> for PopulationSnapshot {
    fn from_iter<I: IntoIterator<Item = (MetricType, Vec<f64>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
