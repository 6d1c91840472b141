//! Newtype ID wrappers for type-safe identifiers.
//!
//! Each ID type wraps a `String` to prevent cross-type confusion.
//! A `CohortId` cannot be accidentally used where a `ContributorId`
//! is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_id!(
    /// Cohort identifier. Unique and immutable for the cohort's lifetime.
    CohortId
);

define_id!(
    /// Identifier of a single condition within a cohort's rule set.
    ConditionId
);

define_id!(
    /// Contributor identifier (the contributor's email address).
    ContributorId
);
