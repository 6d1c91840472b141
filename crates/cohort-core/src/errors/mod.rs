//! Typed error taxonomy.
//!
//! Every failure in the core is a rejected operation with a typed
//! reason; there are no fatal classes. Evaluation fallbacks (missing
//! metric, unusable threshold) are deliberately *not* errors — they
//! are defined fail-closed outcomes, handled in `cohort-engine`.

pub mod config_error;
pub mod error_code;
pub mod policy_error;
pub mod registry_error;
pub mod validation;

pub use config_error::ConfigError;
pub use error_code::CohortErrorCode;
pub use policy_error::PolicyError;
pub use registry_error::{CohortValidationError, RegistryError};
pub use validation::{ConfigViolation, ViolationSeverity};
