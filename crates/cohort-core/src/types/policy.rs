//! Policy kinds and their scalar semantics.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::workflow::WorkflowStep;

/// The two policies cohort overrides can attach to.
///
/// Each kind fixes three things: which workflow steps its cohorts may
/// come from, the valid range of its scalar, and how overlapping
/// overrides reduce to a single effective value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Per-contributor cap on tasks assignable per day. Overlaps reduce
    /// by minimum: the most restrictive linked cohort wins.
    DailyTaskLimit,
    /// Per-contributor percentage of completed tasks routed to quality
    /// review. Overlaps reduce by maximum: the most aggressive sampling
    /// wins.
    QcSampling,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyTaskLimit => "daily-task-limit",
            Self::QcSampling => "qc-sampling",
        }
    }

    pub fn all() -> &'static [PolicyKind] {
        &[Self::DailyTaskLimit, Self::QcSampling]
    }

    /// Workflow steps whose cohorts are linkable to this policy.
    ///
    /// Cross-step linkage is structurally prevented: these lists are a
    /// hard filter applied before any cohort is offered as linkable.
    pub fn eligible_steps(&self) -> &'static [WorkflowStep] {
        match self {
            Self::DailyTaskLimit => &[WorkflowStep::Maker],
            Self::QcSampling => &[WorkflowStep::Reviewer, WorkflowStep::Rework],
        }
    }

    /// Whether `value` is a valid scalar for this policy.
    ///
    /// Daily limits are whole numbers >= 1; sampling percentages are
    /// reals in [0, 100].
    pub fn scalar_in_range(&self, value: f64) -> bool {
        match self {
            Self::DailyTaskLimit => value.is_finite() && value >= 1.0 && value.fract() == 0.0,
            Self::QcSampling => value.is_finite() && (0.0..=100.0).contains(&value),
        }
    }

    /// Human-readable description of the valid scalar range.
    pub fn scalar_range_label(&self) -> &'static str {
        match self {
            Self::DailyTaskLimit => "a whole number of tasks >= 1",
            Self::QcSampling => "a percentage between 0 and 100",
        }
    }

    /// Reduce two applicable override scalars into one.
    ///
    /// Commutative and associative, so override ordering carries no
    /// resolution semantics.
    pub fn combine(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::DailyTaskLimit => a.min(b),
            Self::QcSampling => a.max(b),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
