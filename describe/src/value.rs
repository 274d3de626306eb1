//! Filter values and decoded descriptions.

use serde::{Deserialize, Serialize};

use crate::{Codec, Fragment, Operator, Result};

/// Value a filter operator is applied with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A single string (every operator with a value except `is any of`)
    Single(String),
    /// Ordered alternatives for `is any of`
    List(Vec<String>),
}

impl FilterValue {
    /// The string, if this is a single value.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            FilterValue::Single(s) => Some(s),
            FilterValue::List(_) => None,
        }
    }

    /// The alternatives, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FilterValue::Single(_) => None,
            FilterValue::List(items) => Some(items),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Single(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Single(s)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(items: Vec<String>) -> Self {
        FilterValue::List(items)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(items: Vec<&str>) -> Self {
        FilterValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FilterValue {
    fn from(items: &[&str]) -> Self {
        FilterValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

/// An operator together with its value, as recovered from a fragment.
///
/// Serializes as `{"operator": ..., "value": ...}`; `value` is left out
/// for `is empty` and `is not empty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub operator: Operator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,
}

impl Description {
    pub fn new(operator: Operator, value: impl Into<FilterValue>) -> Self {
        Self {
            operator,
            value: Some(value.into()),
        }
    }

    /// A description with no value.
    pub fn bare(operator: Operator) -> Self {
        Self {
            operator,
            value: None,
        }
    }

    /// Re-encode this description with `codec`.
    pub fn to_fragment(&self, codec: &Codec) -> Result<Fragment> {
        codec.encode(self.operator, self.value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, EmptyAnyOf};

    #[test]
    fn test_description_json_omits_missing_value() {
        let json = serde_json::to_value(Description::bare(Operator::IsEmpty)).unwrap();
        assert_eq!(json, serde_json::json!({ "operator": "is empty" }));
    }

    #[test]
    fn test_description_json_with_list() {
        let desc = Description::new(Operator::IsAnyOf, vec!["a", "b"]);
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "operator": "is any of", "value": ["a", "b"] })
        );
        let back: Description = serde_json::from_value(json).unwrap();
        assert_eq!(back, desc);
    }

    #[test]
    fn test_filter_value_accessors() {
        let single = FilterValue::from("x");
        assert_eq!(single.as_single(), Some("x"));
        assert!(single.as_list().is_none());

        let list = FilterValue::from(&["x", "y"][..]);
        assert!(list.as_single().is_none());
        assert_eq!(list.as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_to_fragment() {
        let fragment = Description::new(Operator::StartsWith, "ab")
            .to_fragment(&Codec::default())
            .unwrap();
        assert_eq!(fragment, Fragment::regex("^ab", "i"));
    }

    #[test]
    fn test_to_fragment_uses_codec_config() {
        let codec = Codec::new(Config {
            options: "im".to_string(),
            empty_any_of: EmptyAnyOf::NeverMatch,
        });

        let fragment = Description::new(Operator::Is, "a").to_fragment(&codec).unwrap();
        assert_eq!(fragment, Fragment::regex("^a$", "im"));

        let empty = Description::new(Operator::IsAnyOf, Vec::<String>::new());
        let fragment = empty.to_fragment(&codec).unwrap();
        assert_eq!(fragment, Fragment::AnyOf { any_of: Vec::new() });
        assert_eq!(fragment.describe(&codec), Some(empty));
    }
}
