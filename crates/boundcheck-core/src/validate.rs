//! The range predicate itself.
//!
//! `validate` is a pure function over a compiled [`RangeSchema`] and an
//! arbitrary JSON instance. It owns no state, performs no I/O, and returns
//! a plain boolean; callers that need to know *why* a schema was rejected
//! get that from [`RangeSchema::compile`](crate::RangeSchema::compile)
//! instead.

use serde_json::Value;

use crate::schema::RangeSchema;

/// Check a JSON instance against a compiled range fragment.
///
/// Range keywords are type-agnostic: any non-numeric instance is valid
/// regardless of the bounds, matching how `maximum`/`minimum` behave in a
/// full validator when no `type` keyword forces the instance to be a number.
///
/// Boundary semantics:
/// - inclusive (flag absent/false): valid iff `instance <= bound`
/// - exclusive (flag true): valid iff `instance < bound`
///
/// NaN policy: a NaN on either side of a comparison fails that bound (IEEE
/// comparisons are false). JSON can never produce one, so this only matters
/// for hand-built `RangeSchema` values.
pub fn validate(schema: &RangeSchema, instance: &Value) -> bool {
    let Some(n) = instance.as_f64() else {
        return true;
    };
    if let Some(max) = schema.maximum {
        let ok = if schema.exclusive_maximum { n < max } else { n <= max };
        if !ok {
            return false;
        }
    }
    if let Some(min) = schema.minimum {
        let ok = if schema.exclusive_minimum { n > min } else { n >= min };
        if !ok {
            return false;
        }
    }
    true
}
