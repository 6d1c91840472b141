//! Policy link stores and the resolution engine.

pub mod links;
pub mod resolution;
pub mod types;

pub use links::PolicyLinkStore;
pub use resolution::{Contributor, MembershipSource, Resolved, ResolvedFrom, Resolver};
pub use types::{LinkedOverride, PolicyConfig};
