//! Description -> fragment.

use crate::config::EmptyAnyOf;
use crate::escape::escape;
use crate::{Error, FilterValue, Fragment, Operator, RegexMatch, Result, ValueKind};

use super::Codec;

impl Codec {
    /// Build a query fragment for an already-validated operator.
    pub fn encode(&self, operator: Operator, value: Option<&FilterValue>) -> Result<Fragment> {
        let invalid = || {
            tracing::debug!(%operator, ?value, "invalid value for operator");
            Error::InvalidValueShape {
                operator: operator.to_string(),
                expected: operator.value_kind(),
            }
        };

        match operator.value_kind() {
            ValueKind::None => {
                if value.is_some() {
                    return Err(invalid());
                }
                if operator == Operator::IsEmpty {
                    Ok(Fragment::empty())
                } else {
                    Ok(Fragment::not_empty())
                }
            }
            ValueKind::List => {
                let items = value.and_then(FilterValue::as_list).ok_or_else(invalid)?;
                if items.is_empty() && self.config.empty_any_of == EmptyAnyOf::Reject {
                    return Err(invalid());
                }
                let any_of = items
                    .iter()
                    .map(|item| self.regex_match(format!("^{}$", escape(item))))
                    .collect();
                Ok(Fragment::AnyOf { any_of })
            }
            ValueKind::Single => {
                let raw = value.and_then(FilterValue::as_single).ok_or_else(invalid)?;
                let escaped = escape(raw);
                let pattern = match operator {
                    Operator::Is | Operator::IsNot => format!("^{}$", escaped),
                    Operator::StartsWith => format!("^{}", escaped),
                    Operator::EndsWith => format!("{}$", escaped),
                    _ => escaped,
                };
                let regex = self.regex_match(pattern);
                if operator.is_negated() {
                    Ok(Fragment::Not { not: regex })
                } else {
                    Ok(Fragment::Regex(regex))
                }
            }
        }
    }

    fn regex_match(&self, pattern: String) -> RegexMatch {
        RegexMatch::new(pattern, self.config.options.as_str())
    }
}
