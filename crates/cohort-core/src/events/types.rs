//! Event payload types.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigViolation;
use crate::types::{CohortId, ContributorId, MetricType, PolicyKind};

/// A policy configuration was saved in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSavedEvent {
    pub kind: PolicyKind,
    pub linked_cohorts: usize,
    pub default_value: f64,
}

/// A policy configuration save was rejected; nothing was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigRejectedEvent {
    pub kind: PolicyKind,
    pub violations: Vec<ConfigViolation>,
}

/// A cohort's lifecycle status changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortArchivedEvent {
    pub cohort_id: CohortId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortUnarchivedEvent {
    pub cohort_id: CohortId,
    pub name: String,
}

/// A condition evaluation fell back to "no match".
///
/// Fail-closed outcomes are silent at the evaluation layer; this event
/// exists so hosts can count them for diagnosability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationFallbackEvent {
    pub cohort_id: CohortId,
    pub contributor: ContributorId,
    pub metric: MetricType,
    pub reason: String,
}
