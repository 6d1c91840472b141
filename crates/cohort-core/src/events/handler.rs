//! CohortEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling cohort/policy events.
///
/// All methods have no-op default implementations, so handlers only
/// need to override the events they care about. `Send + Sync` so the
/// same handler can observe parallel resolution runs.
pub trait CohortEventHandler: Send + Sync {
    fn on_config_saved(&self, _event: &ConfigSavedEvent) {}
    fn on_config_rejected(&self, _event: &ConfigRejectedEvent) {}
    fn on_cohort_archived(&self, _event: &CohortArchivedEvent) {}
    fn on_cohort_unarchived(&self, _event: &CohortUnarchivedEvent) {}
    fn on_evaluation_fallback(&self, _event: &EvaluationFallbackEvent) {}
}
