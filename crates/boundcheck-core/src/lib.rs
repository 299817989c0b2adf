//! Numeric-range keyword validation for JSON instances.
//!
//! Implements the draft-4 style `maximum`/`exclusiveMaximum` (and the mirror
//! `minimum`/`exclusiveMinimum`) keywords as a standalone, stateless
//! predicate, plus the declarative fixture format used to drive conformance
//! runs against it.
//!
//! Two-phase use: compile the schema fragment once, then apply it to any
//! number of instances:
//!
//! ```
//! use boundcheck_core::{validate, RangeSchema};
//! use serde_json::json;
//!
//! let schema = RangeSchema::compile(&json!({ "maximum": 3.0 }))?;
//! assert!(validate(&schema, &json!(2.6)));
//! assert!(!validate(&schema, &json!(3.5)));
//! assert!(validate(&schema, &json!("x"))); // non-numbers are exempt
//! # Ok::<(), boundcheck_core::SchemaError>(())
//! ```

pub mod error;
pub mod fixture;
pub mod schema;
pub mod validate;

pub use error::SchemaError;
pub use schema::RangeSchema;
pub use validate::validate;

/// One-shot convenience: compile `schema` and validate `instance` against it.
///
/// Prefer [`RangeSchema::compile`] + [`validate`] when checking many
/// instances against the same schema.
pub fn check(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Result<bool, SchemaError> {
    let compiled = RangeSchema::compile(schema)?;
    Ok(validate(&compiled, instance))
}
