//! Synchronous event dispatch to registered handlers.

use std::sync::Arc;

use super::handler::CohortEventHandler;
use super::types::*;

/// Fans events out to every registered handler, in registration order.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn CohortEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn CohortEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn config_saved(&self, event: &ConfigSavedEvent) {
        for h in &self.handlers {
            h.on_config_saved(event);
        }
    }

    pub fn config_rejected(&self, event: &ConfigRejectedEvent) {
        for h in &self.handlers {
            h.on_config_rejected(event);
        }
    }

    pub fn cohort_archived(&self, event: &CohortArchivedEvent) {
        for h in &self.handlers {
            h.on_cohort_archived(event);
        }
    }

    pub fn cohort_unarchived(&self, event: &CohortUnarchivedEvent) {
        for h in &self.handlers {
            h.on_cohort_unarchived(event);
        }
    }

    pub fn evaluation_fallback(&self, event: &EvaluationFallbackEvent) {
        for h in &self.handlers {
            h.on_evaluation_fallback(event);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
