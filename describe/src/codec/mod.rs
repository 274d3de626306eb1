//! Encoding and decoding of filter descriptions.
//!
//! # Fragment shapes
//!
//! | operator           | fragment                                  |
//! |--------------------|-------------------------------------------|
//! | `is`               | `{ $regex: "^v$", $options: "i" }`        |
//! | `is not`           | `{ $not: { $regex: "^v$", ... } }`        |
//! | `is any of`        | `{ $or: [{ $regex: "^a$", ... }, ...] }`  |
//! | `contains`         | `{ $regex: "v", ... }`                    |
//! | `does not contain` | `{ $not: { $regex: "v", ... } }`          |
//! | `starts with`      | `{ $regex: "^v", ... }`                   |
//! | `ends with`        | `{ $regex: "v$", ... }`                   |
//! | `is empty`         | `{ $in: [null, ""] }`                     |
//! | `is not empty`     | `{ $exists: true, $nin: [null, ""] }`     |
//!
//! Values are regex-escaped on the way in and unescaped on the way out.

mod decode;
mod encode;

use serde_json::Value;

use crate::{Config, Description, FilterValue, Fragment, Operator, Result};

/// Translates between descriptions and query fragments.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: Config,
}

impl Codec {
    /// Create a codec with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this codec encodes and decodes with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a query fragment from an operator name and value.
    pub fn create(&self, operator: &str, value: Option<FilterValue>) -> Result<Fragment> {
        let operator: Operator = operator.parse().inspect_err(|e| {
            tracing::debug!(error = %e, "rejected operator");
        })?;
        self.encode(operator, value.as_ref())
    }

    /// Recover the operator and value from a query fragment.
    ///
    /// Returns `None` for anything that doesn't match one of the known shapes.
    pub fn parse(&self, fragment: &Value) -> Option<Description> {
        decode::decode(&self.config, fragment)
    }
}

/// Build a query fragment with the default configuration.
pub fn create(operator: &str, value: Option<FilterValue>) -> Result<Fragment> {
    Codec::default().create(operator, value)
}

/// Decode a query fragment with the default configuration.
pub fn parse(fragment: &Value) -> Option<Description> {
    Codec::default().parse(fragment)
}
