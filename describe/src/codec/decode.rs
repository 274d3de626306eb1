//! Fragment -> description.
//!
//! Shapes overlap (`^a$` also starts with `^`), so recognizers are tried
//! in a fixed order and the first hit wins.

use serde_json::{Map, Value};

use crate::config::EmptyAnyOf;
use crate::escape::unescape;
use crate::{Config, Description, FilterValue, Operator};

/// The parts of a fragment the recognizers look at.
struct Shape<'a> {
    object: &'a Map<String, Value>,
    /// `$regex`
    regex: Option<&'a str>,
    /// `$not.$regex`
    negated: Option<&'a str>,
    /// `$or`
    any_of: Option<&'a [Value]>,
}

impl<'a> Shape<'a> {
    fn of(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            regex: regex_of(object),
            negated: object
                .get("$not")
                .and_then(Value::as_object)
                .and_then(regex_of),
            any_of: object.get("$or").and_then(Value::as_array).map(Vec::as_slice),
        }
    }
}

fn regex_of(object: &Map<String, Value>) -> Option<&str> {
    object.get("$regex").and_then(Value::as_str)
}

type Recognizer = fn(&Shape<'_>, &Config) -> Option<Description>;

/// Recognizers in priority order.
const RULES: [Recognizer; 9] = [
    is_any_of,
    is,
    is_not,
    starts_with,
    ends_with,
    contains,
    does_not_contain,
    is_empty,
    is_not_empty,
];

pub(super) fn decode(config: &Config, fragment: &Value) -> Option<Description> {
    let Some(object) = fragment.as_object() else {
        tracing::debug!(%fragment, "query fragment is not an object");
        return None;
    };

    let shape = Shape::of(object);
    for rule in RULES {
        if let Some(description) = rule(&shape, config) {
            tracing::trace!(operator = %description.operator, "recognized query fragment");
            return Some(description);
        }
    }

    tracing::debug!(%fragment, "unrecognized query fragment");
    None
}

fn is_any_of(shape: &Shape<'_>, config: &Config) -> Option<Description> {
    let branches = shape.any_of?;
    if branches.is_empty() && config.empty_any_of == EmptyAnyOf::Reject {
        return None;
    }
    // Every branch must be an `is` match, otherwise the whole thing is unknown
    let values = branches
        .iter()
        .map(|branch| {
            let pattern = branch.as_object().and_then(regex_of)?;
            exact_body(pattern).map(unescape)
        })
        .collect::<Option<Vec<_>>>()?;
    Some(Description::new(Operator::IsAnyOf, FilterValue::List(values)))
}

fn is(shape: &Shape<'_>, _: &Config) -> Option<Description> {
    let body = shape.regex.and_then(exact_body)?;
    Some(Description::new(Operator::Is, unescape(body)))
}

fn is_not(shape: &Shape<'_>, _: &Config) -> Option<Description> {
    let body = shape.negated.and_then(exact_body)?;
    Some(Description::new(Operator::IsNot, unescape(body)))
}

fn starts_with(shape: &Shape<'_>, _: &Config) -> Option<Description> {
    let body = shape.regex.and_then(|p| p.strip_prefix('^'))?;
    Some(Description::new(Operator::StartsWith, unescape(body)))
}

fn ends_with(shape: &Shape<'_>, _: &Config) -> Option<Description> {
    let body = shape.regex.and_then(suffix_body)?;
    Some(Description::new(Operator::EndsWith, unescape(body)))
}

fn contains(shape: &Shape<'_>, _: &Config) -> Option<Description> {
    let pattern = shape.regex?;
    Some(Description::new(Operator::Contains, unescape(pattern)))
}

fn does_not_contain(shape: &Shape<'_>, _: &Config) -> Option<Description> {
    let pattern = shape.negated?;
    Some(Description::new(Operator::DoesNotContain, unescape(pattern)))
}

/// `{ $in: [null, ""] }` and nothing else.
fn is_empty(shape: &Shape<'_>, _: &Config) -> Option<Description> {
    let object = shape.object;
    if object.len() == 1 && is_sentinel_set(object.get("$in")) {
        Some(Description::bare(Operator::IsEmpty))
    } else {
        None
    }
}

/// `{ $exists: true, $nin: [null, ""] }` and nothing else.
fn is_not_empty(shape: &Shape<'_>, _: &Config) -> Option<Description> {
    let object = shape.object;
    if object.len() == 2
        && object.get("$exists") == Some(&Value::Bool(true))
        && is_sentinel_set(object.get("$nin"))
    {
        Some(Description::bare(Operator::IsNotEmpty))
    } else {
        None
    }
}

/// Exactly `null` and `""`, in either order.
fn is_sentinel_set(values: Option<&Value>) -> bool {
    let Some(values) = values.and_then(Value::as_array) else {
        return false;
    };
    values.len() == 2
        && values.contains(&Value::Null)
        && values.contains(&Value::String(String::new()))
}

/// True if the pattern ends in a `$` anchor rather than an escaped `\$`.
///
/// The `$` is literal only when preceded by an odd run of backslashes, so
/// `a\\$` (escaped backslash, then anchor) is anchored and a lone `$` is too.
fn matches_end(pattern: &str) -> bool {
    let Some(rest) = pattern.strip_suffix('$') else {
        return false;
    };
    let backslashes = rest.bytes().rev().take_while(|&b| b == b'\\').count();
    backslashes % 2 == 0
}

/// Body of a pattern anchored with a trailing `$`.
fn suffix_body(pattern: &str) -> Option<&str> {
    if matches_end(pattern) {
        pattern.strip_suffix('$')
    } else {
        None
    }
}

/// Body of a pattern anchored at both ends. `^$` yields the empty string.
fn exact_body(pattern: &str) -> Option<&str> {
    suffix_body(pattern)?.strip_prefix('^')
}
