//! Condition model: comparison operators and tagged threshold values.

use std::fmt;

use serde::{Deserialize, Serialize};

use cohort_core::types::{ConditionId, MetricType};

/// Numeric comparison operators with standard semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOp {
    GreaterThan,
    LessThan,
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl ComparisonOp {
    /// Apply the comparison.
    ///
    /// `Equal` is exact floating-point equality. That is inherently
    /// fragile for non-integer metrics (a rate of 0.1 + 0.2 will not
    /// equal 0.3); it is intended for count-valued metrics and is
    /// covered by a boundary test.
    pub fn apply(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::GreaterThan => lhs > rhs,
            Self::LessThan => lhs < rhs,
            Self::Equal => lhs == rhs,
            Self::GreaterOrEqual => lhs >= rhs,
            Self::LessOrEqual => lhs <= rhs,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::Equal => "=",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A condition threshold, decided at parse time.
///
/// Operator input is a free-form string that may hold a raw number
/// ("50") or a percentile token ("P5"). Representing the parsed result
/// as a tagged variant keeps evaluation free of string handling: an
/// invalid format is an explicit parse error, never a surprise at
/// evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConditionValue {
    /// A raw numeric threshold, compared directly.
    Raw { number: f64 },
    /// A percentile rank in [0, 100], resolved against the population
    /// distribution of the condition's metric at evaluation time.
    Percentile { rank: f64 },
}

impl ConditionValue {
    /// Parse operator input. `use_percentile` selects the variant; the
    /// percentile form accepts an optional leading `P`/`p` ("P5", "5").
    pub fn parse(raw: &str, use_percentile: bool) -> Result<Self, ConditionParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConditionParseError::Empty);
        }

        if use_percentile {
            let digits = trimmed
                .strip_prefix(['P', 'p'])
                .unwrap_or(trimmed)
                .trim();
            let rank: f64 = digits.parse().map_err(|_| ConditionParseError::NotANumber {
                value: raw.to_string(),
            })?;
            if !rank.is_finite() || !(0.0..=100.0).contains(&rank) {
                return Err(ConditionParseError::PercentileOutOfRange { rank });
            }
            Ok(Self::Percentile { rank })
        } else {
            let number: f64 = trimmed.parse().map_err(|_| ConditionParseError::NotANumber {
                value: raw.to_string(),
            })?;
            if !number.is_finite() {
                return Err(ConditionParseError::NotANumber {
                    value: raw.to_string(),
                });
            }
            Ok(Self::Raw { number })
        }
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw { number } => write!(f, "{number}"),
            Self::Percentile { rank } => write!(f, "P{rank}"),
        }
    }
}

/// Errors from parsing a condition's value field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConditionParseError {
    #[error("condition value is empty")]
    Empty,

    #[error("condition value {value:?} is not a number")]
    NotANumber { value: String },

    #[error("percentile rank {rank} is outside 0-100")]
    PercentileOutOfRange { rank: f64 },
}

/// One metric/operator/threshold test within a cohort's rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: ConditionId,
    pub metric: MetricType,
    pub operator: ComparisonOp,
    pub value: ConditionValue,
}

/// Raw condition input as it arrives from the operator's form, before
/// the value field has been parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDraft {
    pub metric: MetricType,
    pub operator: ComparisonOp,
    pub value: String,
    pub use_percentile: bool,
}

impl ConditionDraft {
    /// Parse into a usable [`Condition`] with the given id.
    pub fn build(&self, id: ConditionId) -> Result<Condition, ConditionParseError> {
        let value = ConditionValue::parse(&self.value, self.use_percentile)?;
        Ok(Condition {
            id,
            metric: self.metric,
            operator: self.operator,
            value,
        })
    }
}
