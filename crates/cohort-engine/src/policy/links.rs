//! Per-policy override link store.
//!
//! Edits stage against the store like the operator's form edits stage
//! against a modal; `save` validates everything and either returns the
//! complete config for the host to persist and swap in, or rejects the
//! whole thing with the full violation list. Readers of a previously
//! saved config never observe a partially-updated override list.

use cohort_core::errors::{ConfigViolation, PolicyError};
use cohort_core::types::{CohortId, PolicyKind};

use crate::cohorts::CohortRegistry;

use super::types::{LinkedOverride, PolicyConfig};

/// Holds one policy's staged configuration and enforces link rules.
#[derive(Debug, Clone)]
pub struct PolicyLinkStore {
    config: PolicyConfig,
}

impl PolicyLinkStore {
    pub fn new(kind: PolicyKind, default_value: f64) -> Self {
        Self {
            config: PolicyConfig::new(kind, default_value),
        }
    }

    /// Adopt a previously persisted config wholesale, after validating
    /// it in full. On error nothing is adopted.
    pub fn load(config: PolicyConfig, registry: &CohortRegistry) -> Result<Self, PolicyError> {
        let staged = Self { config };
        let violations = staged.validate_all(registry);
        if violations.iter().any(ConfigViolation::is_blocking) {
            return Err(PolicyError::ValidationFailed { violations });
        }
        Ok(staged)
    }

    pub fn kind(&self) -> PolicyKind {
        self.config.kind
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Link a cohort with an override scalar.
    ///
    /// Archived cohorts are a valid target — only ids the registry has
    /// never seen are rejected. On any error the store is unchanged.
    pub fn add_override(
        &mut self,
        registry: &CohortRegistry,
        cohort_id: CohortId,
        value: f64,
    ) -> Result<(), PolicyError> {
        if !self.config.kind.scalar_in_range(value) {
            return Err(PolicyError::InvalidScalar {
                kind: self.config.kind,
                value,
            });
        }
        if self.config.is_linked(&cohort_id) {
            return Err(PolicyError::DuplicateLink { cohort_id });
        }
        if !registry.contains(&cohort_id) {
            return Err(PolicyError::UnknownCohort { cohort_id });
        }
        tracing::debug!(policy = %self.config.kind, cohort = %cohort_id, value, "override linked");
        self.config.overrides.push(LinkedOverride { cohort_id, value });
        Ok(())
    }

    /// Change the scalar of an existing link.
    pub fn update_override(&mut self, cohort_id: &CohortId, value: f64) -> Result<(), PolicyError> {
        if !self.config.kind.scalar_in_range(value) {
            return Err(PolicyError::InvalidScalar {
                kind: self.config.kind,
                value,
            });
        }
        let entry = self
            .config
            .overrides
            .iter_mut()
            .find(|o| &o.cohort_id == cohort_id)
            .ok_or_else(|| PolicyError::LinkNotFound {
                cohort_id: cohort_id.clone(),
            })?;
        entry.value = value;
        Ok(())
    }

    /// Unlink a cohort, removing its override from resolution entirely.
    pub fn remove_override(&mut self, cohort_id: &CohortId) -> Result<LinkedOverride, PolicyError> {
        let index = self
            .config
            .overrides
            .iter()
            .position(|o| &o.cohort_id == cohort_id)
            .ok_or_else(|| PolicyError::LinkNotFound {
                cohort_id: cohort_id.clone(),
            })?;
        tracing::debug!(policy = %self.config.kind, cohort = %cohort_id, "override unlinked");
        Ok(self.config.overrides.remove(index))
    }

    pub fn set_default(&mut self, value: f64) -> Result<(), PolicyError> {
        if !self.config.kind.scalar_in_range(value) {
            return Err(PolicyError::InvalidScalar {
                kind: self.config.kind,
                value,
            });
        }
        self.config.default_value = value;
        Ok(())
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Validate the staged config in full.
    ///
    /// Out-of-range scalars and unknown cohort references are blocking
    /// errors. A linked cohort that has since been archived is a
    /// warning: the override stays in force for cached members, but the
    /// UI should flag the configuration.
    pub fn validate_all(&self, registry: &CohortRegistry) -> Vec<ConfigViolation> {
        let kind = self.config.kind;
        let mut violations = Vec::new();

        if !kind.scalar_in_range(self.config.default_value) {
            violations.push(ConfigViolation::error(
                "default",
                None,
                format!(
                    "default value {} is invalid; expected {}",
                    self.config.default_value,
                    kind.scalar_range_label()
                ),
            ));
        }

        for link in &self.config.overrides {
            if !kind.scalar_in_range(link.value) {
                violations.push(ConfigViolation::error(
                    "override",
                    Some(link.cohort_id.clone()),
                    format!(
                        "override {} for cohort {} is invalid; expected {}",
                        link.value,
                        link.cohort_id,
                        kind.scalar_range_label()
                    ),
                ));
            }
            match registry.get(&link.cohort_id) {
                Ok(cohort) if cohort.is_archived() => {
                    violations.push(ConfigViolation::warning(
                        "override",
                        Some(link.cohort_id.clone()),
                        format!(
                            "cohort {} is archived; its override still applies to cached members",
                            link.cohort_id
                        ),
                    ));
                }
                Ok(_) => {}
                Err(_) => {
                    violations.push(ConfigViolation::error(
                        "override",
                        Some(link.cohort_id.clone()),
                        format!("cohort {} does not exist", link.cohort_id),
                    ));
                }
            }
        }

        violations
    }

    /// All-or-nothing save.
    ///
    /// Any blocking violation aborts the entire save and reports the
    /// full violation list; no override is partially persisted. On
    /// success the returned snapshot is what the host should persist
    /// and atomically swap in for readers.
    pub fn save(&self, registry: &CohortRegistry) -> Result<PolicyConfig, PolicyError> {
        let violations = self.validate_all(registry);
        if violations.iter().any(ConfigViolation::is_blocking) {
            tracing::warn!(
                policy = %self.config.kind,
                violations = violations.len(),
                "configuration save rejected"
            );
            return Err(PolicyError::ValidationFailed { violations });
        }
        tracing::info!(
            policy = %self.config.kind,
            linked = self.config.overrides.len(),
            default = self.config.default_value,
            "configuration saved"
        );
        Ok(self.config.clone())
    }
}
