//! Schema-fragment compilation.
//!
//! A raw `serde_json::Value` schema is checked once, up front, and turned
//! into a [`RangeSchema`] the validator can apply without re-inspecting JSON
//! on every call. Malformed bound keywords are rejected here (fail fast);
//! `validate` never sees them.

use serde_json::Value;
use tracing::trace;

use crate::error::{json_type_name, SchemaError};

/// Compiled numeric-range fragment: optional upper and lower bounds with
/// draft-4 boolean exclusivity flags.
///
/// An absent bound imposes no constraint. The default value constrains
/// nothing and accepts every instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeSchema {
    /// Upper bound; `None` means the `maximum` keyword is not present.
    pub maximum: Option<f64>,
    /// When true the upper bound is strict (`<` rather than `<=`).
    pub exclusive_maximum: bool,
    /// Lower bound; `None` means the `minimum` keyword is not present.
    pub minimum: Option<f64>,
    /// When true the lower bound is strict (`>` rather than `>=`).
    pub exclusive_minimum: bool,
}

impl RangeSchema {
    /// Compile the range keywords out of a raw schema value.
    ///
    /// Non-object schemas (boolean schemas, bare strings in malformed input)
    /// carry no range keywords and compile to the unconstrained fragment.
    /// Unknown keywords are ignored; only the four range keywords are read.
    pub fn compile(schema: &Value) -> Result<Self, SchemaError> {
        let Some(map) = schema.as_object() else {
            return Ok(Self::default());
        };

        let compiled = Self {
            maximum: bound(map.get("maximum"), "maximum")?,
            exclusive_maximum: exclusivity(map.get("exclusiveMaximum"), "exclusiveMaximum")?,
            minimum: bound(map.get("minimum"), "minimum")?,
            exclusive_minimum: exclusivity(map.get("exclusiveMinimum"), "exclusiveMinimum")?,
        };
        trace!(?compiled, "compiled range schema");
        Ok(compiled)
    }

    /// True when no bound keyword is present, i.e. every instance is valid.
    pub fn is_unconstrained(&self) -> bool {
        self.maximum.is_none() && self.minimum.is_none()
    }
}

fn bound(value: Option<&Value>, keyword: &'static str) -> Result<Option<f64>, SchemaError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let n = value
        .as_f64()
        .ok_or(SchemaError::BoundNotNumeric {
            keyword,
            found: json_type_name(value),
        })?;
    // JSON itself cannot encode NaN or infinities, but a Value built in code
    // can smuggle arbitrary f64 bits through serde_json::Number::from_f64
    // rejecting them already. Guard anyway so the invariant holds for every
    // Value we are handed.
    if !n.is_finite() {
        return Err(SchemaError::BoundNotFinite { keyword });
    }
    Ok(Some(n))
}

fn exclusivity(value: Option<&Value>, keyword: &'static str) -> Result<bool, SchemaError> {
    match value {
        None => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(SchemaError::ExclusivityNotBoolean {
            keyword,
            found: json_type_name(other),
        }),
    }
}
