//! Resolving a contributor's effective policy value.
//!
//! Resolution intersects the contributor's cohort membership with the
//! policy's linked overrides, then reduces the surviving scalars with
//! the policy's combiner: minimum for the daily task limit, maximum for
//! QC sampling. An empty intersection yields the default.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use cohort_core::types::{CohortId, ContributorId, MetricSnapshot, PolicyKind, PopulationSnapshot};

use crate::cohorts::{matcher, CohortRegistry};

use super::types::PolicyConfig;

/// Where a contributor's cohort membership comes from.
#[derive(Debug, Clone)]
pub enum MembershipSource {
    /// A cached membership set, e.g. from a nightly materialization.
    /// May name archived cohorts; their overrides still apply.
    Precomputed(FxHashSet<CohortId>),
    /// Derive membership at resolution time from the contributor's
    /// metrics. Only live cohorts participate in derivation.
    Derivable(MetricSnapshot),
}

/// One contributor as seen by the resolver.
#[derive(Debug, Clone)]
pub struct Contributor {
    pub id: ContributorId,
    pub membership: MembershipSource,
}

/// Provenance of a resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFrom {
    /// No linked cohort matched; the policy default applied.
    Default,
    /// The cohorts whose overrides survived the reduction, in link
    /// order. The winning value came from one of these.
    Overrides(Vec<CohortId>),
}

/// A resolved policy value with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub value: f64,
    pub from: ResolvedFrom,
}

/// Resolves effective policy values against a cohort registry and a
/// population snapshot.
///
/// Borrows both; resolution never mutates them, so one resolver can
/// serve many contributors concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a CohortRegistry,
    population: &'a PopulationSnapshot,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a CohortRegistry, population: &'a PopulationSnapshot) -> Self {
        Self {
            registry,
            population,
        }
    }

    /// The cohorts the contributor belongs to, scoped to the policy's
    /// eligible steps.
    ///
    /// Precomputed sets are trusted as-is, archived members included.
    /// Derivation only consults live cohorts: an archived cohort's rules
    /// are frozen and never re-applied to fresh metrics.
    fn membership(&self, contributor: &Contributor, kind: PolicyKind) -> FxHashSet<CohortId> {
        match &contributor.membership {
            MembershipSource::Precomputed(set) => set.clone(),
            MembershipSource::Derivable(metrics) => self
                .registry
                .iter()
                .filter(|c| c.is_live() && kind.eligible_steps().contains(&c.step))
                .filter(|c| matcher::matches(c, metrics, self.population))
                .map(|c| c.id.clone())
                .collect(),
        }
    }

    /// Resolve the contributor's value under `config`, ignoring the
    /// enabled flag.
    pub fn resolve(&self, contributor: &Contributor, config: &PolicyConfig) -> Resolved {
        let membership = self.membership(contributor, config.kind);

        let mut winners: Vec<CohortId> = Vec::new();
        let mut value: Option<f64> = None;
        for link in &config.overrides {
            if !membership.contains(&link.cohort_id) {
                continue;
            }
            winners.push(link.cohort_id.clone());
            value = Some(match value {
                Some(current) => config.kind.combine(current, link.value),
                None => link.value,
            });
        }

        match value {
            Some(value) => Resolved {
                value,
                from: ResolvedFrom::Overrides(winners),
            },
            None => {
                tracing::debug!(
                    policy = %config.kind,
                    contributor = %contributor.id,
                    default = config.default_value,
                    "no linked cohort matched; default applied"
                );
                Resolved {
                    value: config.default_value,
                    from: ResolvedFrom::Default,
                }
            }
        }
    }

    /// Resolve honoring the enabled flag: `None` means the policy is
    /// switched off and imposes nothing on this contributor.
    pub fn effective(&self, contributor: &Contributor, config: &PolicyConfig) -> Option<Resolved> {
        if !config.enabled {
            return None;
        }
        Some(self.resolve(contributor, config))
    }

    /// Resolve a batch in parallel. Output order matches input order.
    pub fn resolve_all(
        &self,
        contributors: &[Contributor],
        config: &PolicyConfig,
    ) -> Vec<(ContributorId, Resolved)> {
        contributors
            .par_iter()
            .map(|c| (c.id.clone(), self.resolve(c, config)))
            .collect()
    }
}
