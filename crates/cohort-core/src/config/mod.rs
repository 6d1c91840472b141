//! Configuration loading.

pub mod policy_defaults;

pub use policy_defaults::PolicyDefaultsConfig;
