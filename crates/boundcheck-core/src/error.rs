//! Structured errors for the schema-compile step.

use thiserror::Error;

/// Rejection reasons for a malformed range schema.
///
/// `validate` itself has no error channel; everything that can go wrong is
/// caught up front when the fragment is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A bound keyword (`maximum`/`minimum`) holds a non-numeric value.
    #[error("`{keyword}` must be a number, found {found}")]
    BoundNotNumeric {
        keyword: &'static str,
        /// JSON type name of the offending value (e.g. `"string"`).
        found: &'static str,
    },

    /// A bound keyword holds a number outside the finite reals.
    #[error("`{keyword}` must be a finite number")]
    BoundNotFinite { keyword: &'static str },

    /// An exclusivity flag (`exclusiveMaximum`/`exclusiveMinimum`) is not a
    /// boolean. Draft-4 semantics only: the flag modifies the paired bound.
    #[error("`{keyword}` must be a boolean, found {found}")]
    ExclusivityNotBoolean {
        keyword: &'static str,
        found: &'static str,
    },
}

/// JSON type name used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
