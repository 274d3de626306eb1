//! Error types for building query fragments.

use crate::operator::ValueKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown operator {0}")]
    UnknownOperator(String),

    #[error("Invalid value for \"{operator}\": expected {expected}")]
    InvalidValueShape {
        operator: String,
        expected: ValueKind,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
