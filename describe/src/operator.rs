//! The closed set of filter operators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Filter operators understood by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `contains` - unanchored match
    #[serde(rename = "contains")]
    Contains,
    /// `does not contain` - negated unanchored match
    #[serde(rename = "does not contain")]
    DoesNotContain,
    /// `is` - anchored at both ends
    #[serde(rename = "is")]
    Is,
    /// `is not` - negated `is`
    #[serde(rename = "is not")]
    IsNot,
    /// `is any of` - disjunction of `is` matches
    #[serde(rename = "is any of")]
    IsAnyOf,
    /// `is empty` - null or empty string
    #[serde(rename = "is empty")]
    IsEmpty,
    /// `is not empty` - present and neither null nor empty string
    #[serde(rename = "is not empty")]
    IsNotEmpty,
    /// `starts with` - anchored at the start
    #[serde(rename = "starts with")]
    StartsWith,
    /// `ends with` - anchored at the end
    #[serde(rename = "ends with")]
    EndsWith,
}

/// Shape of the value an operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// No value (`is empty`, `is not empty`)
    None,
    /// A single string
    Single,
    /// A list of strings (`is any of`)
    List,
}

impl Operator {
    /// Every supported operator, in the order they are advertised to callers.
    pub const ALL: [Operator; 9] = [
        Operator::Contains,
        Operator::DoesNotContain,
        Operator::Is,
        Operator::IsNot,
        Operator::IsAnyOf,
        Operator::IsEmpty,
        Operator::IsNotEmpty,
        Operator::StartsWith,
        Operator::EndsWith,
    ];

    /// Wire spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Contains => "contains",
            Operator::DoesNotContain => "does not contain",
            Operator::Is => "is",
            Operator::IsNot => "is not",
            Operator::IsAnyOf => "is any of",
            Operator::IsEmpty => "is empty",
            Operator::IsNotEmpty => "is not empty",
            Operator::StartsWith => "starts with",
            Operator::EndsWith => "ends with",
        }
    }

    /// What kind of value the operator takes.
    pub fn value_kind(self) -> ValueKind {
        match self {
            Operator::IsEmpty | Operator::IsNotEmpty => ValueKind::None,
            Operator::IsAnyOf => ValueKind::List,
            _ => ValueKind::Single,
        }
    }

    /// Whether the fragment wraps its pattern in `$not`.
    pub fn is_negated(self) -> bool {
        matches!(self, Operator::IsNot | Operator::DoesNotContain)
    }
}

/// Wire spellings of every supported operator.
pub fn supported_operators() -> impl Iterator<Item = &'static str> {
    Operator::ALL.into_iter().map(Operator::as_str)
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::None => write!(f, "no value"),
            ValueKind::Single => write!(f, "a string"),
            ValueKind::List => write!(f, "a list of strings"),
        }
    }
}
