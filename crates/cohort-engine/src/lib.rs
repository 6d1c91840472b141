//! Cohort membership and policy resolution engine.
//!
//! Subsystems:
//! - `conditions` — single-condition evaluation (raw and percentile
//!   thresholds), fail-closed on unusable input
//! - `cohorts` — cohort model, left-to-right boolean matching, and the
//!   in-memory registry with lifecycle rules
//! - `policy` — per-policy override link stores and the min/max
//!   resolution engine
//! - `stats` — percentile resolution over population distributions
//! - `boundary` — traits the host implements (metric source)
//!
//! All evaluation and resolution paths are pure functions over
//! immutable inputs; resolving many contributors is an embarrassingly
//! parallel map (see [`policy::resolution::Resolver::resolve_all`]).

pub mod boundary;
pub mod cohorts;
pub mod conditions;
pub mod policy;
pub mod stats;
