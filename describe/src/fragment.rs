//! MongoDB query fragments produced by the encoder.
//!
//! Field names (`$regex`, `$options`, `$not`, `$or`, `$in`, `$exists`,
//! `$nin`) are what the database expects and must not change.

use serde::Serialize;
use serde_json::{json, Value};

use crate::{Codec, Description};

/// `{ $regex, $options }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegexMatch {
    #[serde(rename = "$regex")]
    pub regex: String,
    #[serde(rename = "$options")]
    pub options: String,
}

/// A query fragment usable as the value of a document field.
///
/// Only built by the encoder; incoming fragments go through `Codec::parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Fragment {
    /// `{ $regex, $options }`
    Regex(RegexMatch),
    /// `{ $not: { $regex, $options } }`
    Not {
        #[serde(rename = "$not")]
        not: RegexMatch,
    },
    /// `{ $or: [{ $regex, $options }, ...] }`
    AnyOf {
        #[serde(rename = "$or")]
        any_of: Vec<RegexMatch>,
    },
    /// `{ $in: [null, ""] }`
    In {
        #[serde(rename = "$in")]
        values: Vec<Option<String>>,
    },
    /// `{ $exists: true, $nin: [null, ""] }`
    NotIn {
        #[serde(rename = "$exists")]
        exists: bool,
        #[serde(rename = "$nin")]
        values: Vec<Option<String>>,
    },
}

/// Values standing in for "absent or empty": `[null, ""]`.
pub(crate) fn empty_sentinels() -> Vec<Option<String>> {
    vec![None, Some(String::new())]
}

impl RegexMatch {
    /// A `$regex` / `$options` pair.
    pub fn new(regex: impl Into<String>, options: impl Into<String>) -> Self {
        Self {
            regex: regex.into(),
            options: options.into(),
        }
    }

    fn to_value(&self) -> Value {
        json!({ "$regex": self.regex, "$options": self.options })
    }
}

impl Fragment {
    /// A plain regex fragment.
    pub fn regex(regex: impl Into<String>, options: impl Into<String>) -> Self {
        Fragment::Regex(RegexMatch::new(regex, options))
    }

    /// A negated regex fragment.
    pub fn not(regex: impl Into<String>, options: impl Into<String>) -> Self {
        Fragment::Not {
            not: RegexMatch::new(regex, options),
        }
    }

    /// `{ $in: [null, ""] }`
    pub fn empty() -> Self {
        Fragment::In {
            values: empty_sentinels(),
        }
    }

    /// `{ $exists: true, $nin: [null, ""] }`
    pub fn not_empty() -> Self {
        Fragment::NotIn {
            exists: true,
            values: empty_sentinels(),
        }
    }

    /// Decode this fragment with `codec`.
    pub fn describe(&self, codec: &Codec) -> Option<Description> {
        codec.parse(&Value::from(self))
    }
}

impl From<&Fragment> for Value {
    fn from(fragment: &Fragment) -> Self {
        match fragment {
            Fragment::Regex(m) => m.to_value(),
            Fragment::Not { not } => json!({ "$not": not.to_value() }),
            Fragment::AnyOf { any_of } => {
                json!({ "$or": any_of.iter().map(RegexMatch::to_value).collect::<Vec<_>>() })
            }
            Fragment::In { values } => json!({ "$in": values }),
            Fragment::NotIn { exists, values } => json!({ "$exists": exists, "$nin": values }),
        }
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        Value::from(&fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        assert_eq!(
            Value::from(Fragment::regex("^a$", "i")),
            json!({ "$regex": "^a$", "$options": "i" })
        );
        assert_eq!(
            Value::from(Fragment::not("a", "i")),
            json!({ "$not": { "$regex": "a", "$options": "i" } })
        );
        assert_eq!(Value::from(Fragment::empty()), json!({ "$in": [null, ""] }));
        assert_eq!(
            Value::from(Fragment::not_empty()),
            json!({ "$exists": true, "$nin": [null, ""] })
        );
    }

    #[test]
    fn test_serialize_matches_value_conversion() {
        let fragments = [
            Fragment::regex("a\\$", "i"),
            Fragment::not("^a$", "i"),
            Fragment::AnyOf {
                any_of: vec![RegexMatch::new("^a$", "i"), RegexMatch::new("^b$", "i")],
            },
            Fragment::empty(),
            Fragment::not_empty(),
        ];
        for fragment in &fragments {
            assert_eq!(serde_json::to_value(fragment).unwrap(), Value::from(fragment));
        }
    }
}
