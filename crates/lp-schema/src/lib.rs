//! # lp-schema
//!
//! JSON Schemas for every payload the Launchpad backend returns, generated
//! from the `lp-core` types with `schemars` and enforced with `jsonschema`.
//!
//! Stage responses are validated here before they are deserialized, so a
//! response missing `session_id` or carrying an out-of-range opportunity
//! score is rejected with the validator's messages instead of a serde error.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
