//! Policy link store errors.

use std::fmt;

use crate::types::{CohortId, PolicyKind};

use super::error_code::{self, CohortErrorCode};
use super::validation::ConfigViolation;

/// Errors from policy link store operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("{value} is not a valid {kind} scalar; expected {}", kind.scalar_range_label())]
    InvalidScalar { kind: PolicyKind, value: f64 },

    #[error("cohort {cohort_id} is already linked")]
    DuplicateLink { cohort_id: CohortId },

    /// The cohort id references nothing in the registry. Archived
    /// cohorts are a valid link target; only unknown ids are rejected.
    #[error("cohort {cohort_id} does not exist")]
    UnknownCohort { cohort_id: CohortId },

    #[error("cohort {cohort_id} is not linked")]
    LinkNotFound { cohort_id: CohortId },

    /// A save was rejected. Carries the full violation list so the
    /// caller can report every problem at once; nothing was written.
    #[error("configuration save rejected: {}", format_violations(violations))]
    ValidationFailed { violations: Vec<ConfigViolation> },
}

impl CohortErrorCode for PolicyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidScalar { .. } => error_code::INVALID_SCALAR,
            Self::DuplicateLink { .. } => error_code::DUPLICATE_LINK,
            Self::UnknownCohort { .. } => error_code::UNKNOWN_COHORT,
            Self::LinkNotFound { .. } => error_code::LINK_NOT_FOUND,
            Self::ValidationFailed { .. } => error_code::VALIDATION_FAILED,
        }
    }
}

fn format_violations(violations: &[ConfigViolation]) -> ViolationList<'_> {
    ViolationList(violations)
}

struct ViolationList<'a>(&'a [ConfigViolation]);

impl fmt::Display for ViolationList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocking = self.0.iter().filter(|v| v.is_blocking()).count();
        write!(f, "{blocking} blocking violation(s)")?;
        for v in self.0.iter().filter(|v| v.is_blocking()) {
            write!(f, "; {}", v.message)?;
        }
        Ok(())
    }
}
