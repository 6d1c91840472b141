//! In-memory cohort registry with lifecycle rules.

use rustc_hash::FxHashMap;

use cohort_core::errors::RegistryError;
use cohort_core::types::{CohortId, PolicyKind, WorkflowStep};

use super::types::{Cohort, CohortDraft, CohortStatus};

/// Owns the set of cohorts and their lifecycle.
///
/// Writes take `&mut self`: this is a single-writer, operator-console
/// store, not a high-throughput service. Listing APIs return cohorts in
/// creation order.
#[derive(Debug, Default)]
pub struct CohortRegistry {
    cohorts: FxHashMap<CohortId, Cohort>,
    order: Vec<CohortId>,
}

impl CohortRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft and register a new live cohort under `id`.
    pub fn create(&mut self, id: CohortId, draft: &CohortDraft) -> Result<&Cohort, RegistryError> {
        if self.cohorts.contains_key(&id) {
            return Err(RegistryError::DuplicateId { id });
        }
        let cohort = draft.build(id.clone())?;
        tracing::info!(cohort = %id, step = %cohort.step, "cohort created");
        self.order.push(id.clone());
        self.cohorts.insert(id.clone(), cohort);
        Ok(&self.cohorts[&id])
    }

    /// Re-register a cohort loaded from persistence, keeping its status.
    pub fn insert(&mut self, cohort: Cohort) -> Result<(), RegistryError> {
        if self.cohorts.contains_key(&cohort.id) {
            return Err(RegistryError::DuplicateId {
                id: cohort.id.clone(),
            });
        }
        cohort.validate()?;
        self.order.push(cohort.id.clone());
        self.cohorts.insert(cohort.id.clone(), cohort);
        Ok(())
    }

    pub fn get(&self, id: &CohortId) -> Result<&Cohort, RegistryError> {
        self.cohorts
            .get(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })
    }

    pub fn contains(&self, id: &CohortId) -> bool {
        self.cohorts.contains_key(id)
    }

    /// Replace an existing cohort's definition from a draft.
    ///
    /// Archived cohorts are immutable; unarchive first. The cohort's id,
    /// status, and member-count snapshot survive the edit.
    pub fn update(&mut self, id: &CohortId, draft: &CohortDraft) -> Result<&Cohort, RegistryError> {
        let existing = self
            .cohorts
            .get(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })?;
        if existing.is_archived() {
            return Err(RegistryError::ArchivedCohortImmutable { id: id.clone() });
        }

        let mut replacement = draft.build(id.clone())?;
        replacement.status = existing.status;
        replacement.member_count = existing.member_count;
        tracing::info!(cohort = %id, "cohort updated");
        self.cohorts.insert(id.clone(), replacement);
        Ok(&self.cohorts[id])
    }

    /// Archive a cohort. Its linked policy overrides stay in force for
    /// cached members; only editing is frozen. Idempotent.
    pub fn archive(&mut self, id: &CohortId) -> Result<&Cohort, RegistryError> {
        let cohort = self
            .cohorts
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })?;
        if cohort.status != CohortStatus::Archived {
            cohort.status = CohortStatus::Archived;
            tracing::info!(cohort = %id, "cohort archived");
        }
        Ok(cohort)
    }

    /// Restore a cohort to live, making it editable again. Idempotent.
    pub fn unarchive(&mut self, id: &CohortId) -> Result<&Cohort, RegistryError> {
        let cohort = self
            .cohorts
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })?;
        if cohort.status != CohortStatus::Live {
            cohort.status = CohortStatus::Live;
            tracing::info!(cohort = %id, "cohort unarchived");
        }
        Ok(cohort)
    }

    /// All cohorts in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Cohort> {
        self.order.iter().filter_map(|id| self.cohorts.get(id))
    }

    pub fn list_by_step(&self, step: WorkflowStep) -> Vec<&Cohort> {
        self.iter().filter(|c| c.step == step).collect()
    }

    pub fn list_by_status(&self, status: CohortStatus) -> Vec<&Cohort> {
        self.iter().filter(|c| c.status == status).collect()
    }

    /// Cohorts that may be offered as link targets for a policy.
    ///
    /// The step scope is a hard structural filter: a daily-limit policy
    /// never sees non-Maker cohorts, QC sampling never sees cohorts
    /// outside Reviewer/Rework. Archived cohorts are excluded from new
    /// linkage (existing links to them remain valid).
    pub fn linkable(&self, kind: PolicyKind) -> Vec<&Cohort> {
        self.iter()
            .filter(|c| c.is_live() && kind.eligible_steps().contains(&c.step))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cohorts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cohorts.is_empty()
    }
}
