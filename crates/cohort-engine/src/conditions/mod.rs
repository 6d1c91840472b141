//! Cohort conditions: the metric/operator/threshold tests.

pub mod evaluator;
pub mod types;

pub use evaluator::{evaluate, evaluate_detailed, EvalOutcome, FallbackReason};
pub use types::{ComparisonOp, Condition, ConditionDraft, ConditionParseError, ConditionValue};
