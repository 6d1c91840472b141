//! Cohort registry errors.

use crate::types::CohortId;

use super::error_code::{self, CohortErrorCode};

/// Field-level problems with a cohort definition.
///
/// Surfaced on create/update so the caller can point at the specific
/// violating field; never partially applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CohortValidationError {
    #[error("cohort name must not be empty")]
    EmptyName,

    #[error("a cohort needs at least one condition")]
    NoConditions,

    #[error("condition {index} has no value")]
    MissingConditionValue { index: usize },

    #[error("condition {index} value {value:?} is not usable: {reason}")]
    UnparsableConditionValue {
        index: usize,
        value: String,
        reason: String,
    },

    #[error("{conditions} conditions need {} joiners, found {joiners}", conditions.saturating_sub(1))]
    JoinerCountMismatch { conditions: usize, joiners: usize },
}

impl CohortErrorCode for CohortValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_FAILED
    }
}

/// Errors from cohort registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("cohort {id} does not exist")]
    NotFound { id: CohortId },

    #[error("a cohort with id {id} already exists")]
    DuplicateId { id: CohortId },

    /// Editing an archived cohort is rejected; unarchive it first.
    #[error("cohort {id} is archived and cannot be edited")]
    ArchivedCohortImmutable { id: CohortId },

    #[error(transparent)]
    Invalid(#[from] CohortValidationError),
}

impl CohortErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::COHORT_NOT_FOUND,
            Self::DuplicateId { .. } => error_code::DUPLICATE_COHORT,
            Self::ArchivedCohortImmutable { .. } => error_code::ARCHIVED_IMMUTABLE,
            Self::Invalid(inner) => inner.error_code(),
        }
    }
}
