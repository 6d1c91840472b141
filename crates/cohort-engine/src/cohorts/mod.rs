//! Cohort model, matching, and registry.

pub mod matcher;
pub mod registry;
pub mod types;

pub use matcher::matches;
pub use registry::CohortRegistry;
pub use types::{Cohort, CohortDraft, CohortStatus, LogicalOperator};
