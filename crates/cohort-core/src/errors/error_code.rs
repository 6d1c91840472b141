//! CohortErrorCode trait for the host-application boundary.

/// Trait for converting core errors to stable error-code strings.
/// Every error enum implements this so the host UI can key messaging
/// off a structured code instead of parsing display text.
pub trait CohortErrorCode {
    /// Returns the stable error code string (e.g., "UNKNOWN_COHORT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn tagged_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const COHORT_NOT_FOUND: &str = "COHORT_NOT_FOUND";
pub const DUPLICATE_COHORT: &str = "DUPLICATE_COHORT";
pub const ARCHIVED_IMMUTABLE: &str = "ARCHIVED_IMMUTABLE";
pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const INVALID_SCALAR: &str = "INVALID_SCALAR";
pub const DUPLICATE_LINK: &str = "DUPLICATE_LINK";
pub const UNKNOWN_COHORT: &str = "UNKNOWN_COHORT";
pub const LINK_NOT_FOUND: &str = "LINK_NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
