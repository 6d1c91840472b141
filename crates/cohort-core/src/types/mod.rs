//! Shared vocabulary types.

pub mod identifiers;
pub mod metrics;
pub mod policy;
pub mod workflow;

pub use identifiers::{CohortId, ConditionId, ContributorId};
pub use metrics::{DateRange, MetricSnapshot, MetricType, PopulationSnapshot};
pub use policy::PolicyKind;
pub use workflow::{MemberType, WorkflowStep};
