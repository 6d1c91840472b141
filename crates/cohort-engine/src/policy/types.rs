//! Policy configuration types.

use serde::{Deserialize, Serialize};

use cohort_core::config::PolicyDefaultsConfig;
use cohort_core::types::{CohortId, PolicyKind};

/// A cohort-specific scalar attached to a policy, applied only to
/// members of that cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedOverride {
    pub cohort_id: CohortId,
    pub value: f64,
}

/// The full configuration of one policy: a default scalar plus the
/// ordered linked overrides.
///
/// Override order is preserved for display only; the reducers are
/// commutative, so it carries no resolution semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub kind: PolicyKind,
    /// Whether the policy is enforced at all. Only meaningful for the
    /// daily-limit policy; sampling is always on.
    pub enabled: bool,
    /// Applied to contributors matching no linked cohort.
    pub default_value: f64,
    pub overrides: Vec<LinkedOverride>,
}

impl PolicyConfig {
    pub fn new(kind: PolicyKind, default_value: f64) -> Self {
        Self {
            kind,
            enabled: true,
            default_value,
            overrides: Vec::new(),
        }
    }

    /// Build an empty config for `kind` from operator defaults.
    pub fn from_defaults(kind: PolicyKind, defaults: &PolicyDefaultsConfig) -> Self {
        match kind {
            PolicyKind::DailyTaskLimit => Self {
                kind,
                enabled: defaults.effective_daily_limit_enabled(),
                default_value: f64::from(defaults.effective_daily_limit()),
                overrides: Vec::new(),
            },
            PolicyKind::QcSampling => Self {
                kind,
                enabled: true,
                default_value: defaults.effective_sampling_percentage(),
                overrides: Vec::new(),
            },
        }
    }

    pub fn override_for(&self, cohort_id: &CohortId) -> Option<&LinkedOverride> {
        self.overrides.iter().find(|o| &o.cohort_id == cohort_id)
    }

    pub fn is_linked(&self, cohort_id: &CohortId) -> bool {
        self.override_for(cohort_id).is_some()
    }
}
