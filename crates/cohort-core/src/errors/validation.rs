//! Policy configuration violations for all-or-nothing saves.

use serde::{Deserialize, Serialize};

use crate::types::CohortId;

/// How severe a configuration violation is.
///
/// Errors abort a save; warnings (an archived-but-still-linked cohort)
/// are surfaced for the UI without failing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

/// A single problem found while validating a policy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigViolation {
    pub severity: ViolationSeverity,
    /// Which part of the config is affected ("default", "override").
    pub field: String,
    /// The linked cohort involved, when the violation is per-override.
    pub cohort_id: Option<CohortId>,
    pub message: String,
}

impl ConfigViolation {
    pub fn error(field: impl Into<String>, cohort_id: Option<CohortId>, message: impl Into<String>) -> Self {
        Self {
            severity: ViolationSeverity::Error,
            field: field.into(),
            cohort_id,
            message: message.into(),
        }
    }

    pub fn warning(field: impl Into<String>, cohort_id: Option<CohortId>, message: impl Into<String>) -> Self {
        Self {
            severity: ViolationSeverity::Warning,
            field: field.into(),
            cohort_id,
            message: message.into(),
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == ViolationSeverity::Error
    }
}
