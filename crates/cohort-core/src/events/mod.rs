//! Event system for operator-facing outcomes.
//! Trait with no-op defaults, synchronous dispatch, zero overhead when empty.
//!
//! The core signals outcomes (saved / rejected / archived) as typed
//! events; presenting them as toasts or banners is the host's job.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::CohortEventHandler;
