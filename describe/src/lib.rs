//! Mongo regex descriptions
//!
//! Translates a small set of human filter operators ("is", "contains",
//! "starts with", ...) to and from MongoDB query fragments built on
//! `$regex`, `$not`, `$or`, `$in` and `$nin`.

pub mod codec;
pub mod config;
pub mod error;
mod escape;
pub mod fragment;
pub mod operator;
pub mod value;

pub use codec::{create, parse, Codec};
pub use config::{Config, EmptyAnyOf};
pub use error::{Error, Result};
pub use fragment::{Fragment, RegexMatch};
pub use operator::{supported_operators, Operator, ValueKind};
pub use value::{Description, FilterValue};
