//! Workflow steps and member types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The workflow steps a cohort can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStep {
    Maker,
    Reviewer,
    QualityCheck,
    Rework,
}

impl WorkflowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maker => "maker",
            Self::Reviewer => "reviewer",
            Self::QualityCheck => "quality-check",
            Self::Rework => "rework",
        }
    }

    pub fn all() -> &'static [WorkflowStep] {
        &[
            Self::Maker,
            Self::Reviewer,
            Self::QualityCheck,
            Self::Rework,
        ]
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of contributor a cohort segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    Makers,
    Reviewer,
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Makers => f.write_str("makers"),
            Self::Reviewer => f.write_str("reviewer"),
        }
    }
}
