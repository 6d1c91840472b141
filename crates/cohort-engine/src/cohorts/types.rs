//! Cohort model types.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use cohort_core::errors::CohortValidationError;
use cohort_core::types::{CohortId, ConditionId, DateRange, MemberType, WorkflowStep};

use crate::conditions::{Condition, ConditionDraft};

/// Cohort lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CohortStatus {
    Live,
    Archived,
}

impl fmt::Display for CohortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Archived => f.write_str("archived"),
        }
    }
}

/// Boolean joiner between two adjacent conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn combine(&self, a: bool, b: bool) -> bool {
        match self {
            Self::And => a && b,
            Self::Or => a || b,
        }
    }
}

/// A named, rule-defined segment of contributors tied to one workflow
/// step.
///
/// `joiners[i]` joins `conditions[i]` and `conditions[i + 1]`, so a
/// well-formed cohort has exactly `conditions.len() - 1` joiners (zero
/// when there are no conditions). A cohort with zero conditions matches
/// nothing — that is an explicit rule, not an accident of evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    pub id: CohortId,
    pub name: String,
    pub description: String,
    pub step: WorkflowStep,
    pub member_type: MemberType,
    pub date_range: DateRange,
    pub status: CohortStatus,
    pub conditions: SmallVec<[Condition; 2]>,
    pub joiners: SmallVec<[LogicalOperator; 1]>,
    /// Display snapshot of the last computed membership size.
    pub member_count: usize,
}

impl Cohort {
    pub fn is_live(&self) -> bool {
        self.status == CohortStatus::Live
    }

    pub fn is_archived(&self) -> bool {
        self.status == CohortStatus::Archived
    }

    /// Check the joiner-count invariant.
    pub fn validate(&self) -> Result<(), CohortValidationError> {
        let expected = self.conditions.len().saturating_sub(1);
        if self.joiners.len() != expected {
            return Err(CohortValidationError::JoinerCountMismatch {
                conditions: self.conditions.len(),
                joiners: self.joiners.len(),
            });
        }
        Ok(())
    }
}

/// Operator form input for creating or editing a cohort.
///
/// Validation happens here, before anything reaches the registry: an
/// empty name, an empty rule set, or an unusable condition value
/// rejects the whole draft with the violating field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortDraft {
    pub name: String,
    pub description: String,
    pub step: WorkflowStep,
    pub member_type: MemberType,
    pub date_range: DateRange,
    pub conditions: Vec<ConditionDraft>,
    pub joiners: Vec<LogicalOperator>,
}

impl CohortDraft {
    /// Validate and build a live [`Cohort`] with the given id.
    pub fn build(&self, id: CohortId) -> Result<Cohort, CohortValidationError> {
        if self.name.trim().is_empty() {
            return Err(CohortValidationError::EmptyName);
        }
        if self.conditions.is_empty() {
            return Err(CohortValidationError::NoConditions);
        }
        if self.joiners.len() != self.conditions.len() - 1 {
            return Err(CohortValidationError::JoinerCountMismatch {
                conditions: self.conditions.len(),
                joiners: self.joiners.len(),
            });
        }

        let mut conditions = SmallVec::new();
        for (index, draft) in self.conditions.iter().enumerate() {
            if draft.value.trim().is_empty() {
                return Err(CohortValidationError::MissingConditionValue { index });
            }
            let condition_id = ConditionId::new(format!("{id}-condition-{index}"));
            let condition = draft.build(condition_id).map_err(|e| {
                CohortValidationError::UnparsableConditionValue {
                    index,
                    value: draft.value.clone(),
                    reason: e.to_string(),
                }
            })?;
            conditions.push(condition);
        }

        Ok(Cohort {
            id,
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            step: self.step,
            member_type: self.member_type,
            date_range: self.date_range,
            status: CohortStatus::Live,
            conditions,
            joiners: self.joiners.iter().copied().collect(),
            member_count: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use cohort_core::types::MetricType;

    use crate::conditions::ComparisonOp;

    use super::*;

    fn draft_with(conditions: Vec<ConditionDraft>, joiners: Vec<LogicalOperator>) -> CohortDraft {
        CohortDraft {
            name: "Top performers".to_string(),
            description: String::new(),
            step: WorkflowStep::Maker,
            member_type: MemberType::Makers,
            date_range: DateRange::Days(30),
            conditions,
            joiners,
        }
    }

    fn condition_draft(value: &str) -> ConditionDraft {
        ConditionDraft {
            metric: MetricType::TasksSubmitted,
            operator: ComparisonOp::GreaterThan,
            value: value.to_string(),
            use_percentile: false,
        }
    }

    #[test]
    fn build_produces_a_live_cohort() {
        let cohort = draft_with(vec![condition_draft("10")], vec![])
            .build(CohortId::new("cohort-1"))
            .unwrap();
        assert_eq!(cohort.status, CohortStatus::Live);
        assert_eq!(cohort.conditions.len(), 1);
        assert!(cohort.validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut draft = draft_with(vec![condition_draft("10")], vec![]);
        draft.name = "   ".to_string();
        assert_eq!(
            draft.build(CohortId::new("cohort-1")),
            Err(CohortValidationError::EmptyName)
        );
    }

    #[test]
    fn draft_without_conditions_is_rejected() {
        let draft = draft_with(vec![], vec![]);
        assert_eq!(
            draft.build(CohortId::new("cohort-1")),
            Err(CohortValidationError::NoConditions)
        );
    }

    #[test]
    fn blank_condition_value_names_the_index() {
        let draft = draft_with(
            vec![condition_draft("10"), condition_draft("  ")],
            vec![LogicalOperator::And],
        );
        assert_eq!(
            draft.build(CohortId::new("cohort-1")),
            Err(CohortValidationError::MissingConditionValue { index: 1 })
        );
    }

    #[test]
    fn unparsable_condition_value_names_index_and_input() {
        let draft = draft_with(
            vec![condition_draft("ten")],
            vec![],
        );
        match draft.build(CohortId::new("cohort-1")) {
            Err(CohortValidationError::UnparsableConditionValue { index, value, .. }) => {
                assert_eq!(index, 0);
                assert_eq!(value, "ten");
            }
            other => panic!("expected unparsable-value error, got {other:?}"),
        }
    }

    #[test]
    fn joiner_count_must_be_conditions_minus_one() {
        let draft = draft_with(vec![condition_draft("1"), condition_draft("2")], vec![]);
        assert_eq!(
            draft.build(CohortId::new("cohort-1")),
            Err(CohortValidationError::JoinerCountMismatch {
                conditions: 2,
                joiners: 0,
            })
        );
    }
}
