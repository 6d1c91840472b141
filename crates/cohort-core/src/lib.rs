//! Core types, errors, configuration, events, and tracing for the
//! cohort policy engine.
//!
//! This crate carries the shared vocabulary (identifiers, metrics,
//! workflow steps, policy kinds), the typed error taxonomy, the
//! operator-facing event trait, and ambient concerns (config loading,
//! tracing setup). All evaluation and resolution logic lives in
//! `cohort-engine`.

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
