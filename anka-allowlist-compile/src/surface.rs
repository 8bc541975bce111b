//! Surface document validation (pure checks, no side effects)

use serde_json::Value;

use crate::error::{CompileError, CompileResult};

/// Schema tag a surface entries document must carry.
pub const SURFACE_SCHEMA: &str = "fard.stdlib_surface.entries.v1_0";

/// Validate the top-level shape of a surface document and return its entries.
///
/// Checks, in order: the value is an object, the `schema` field equals
/// [`SURFACE_SCHEMA`], and `entries` is an array. No entry is inspected here;
/// per-entry validation happens during aggregation.
pub(crate) fn validate(value: &Value) -> CompileResult<&[Value]> {
    let obj = value.as_object().ok_or(CompileError::InvalidDocument)?;

    let schema = obj.get("schema").and_then(Value::as_str).unwrap_or_default();
    if schema != SURFACE_SCHEMA {
        return Err(CompileError::SchemaMismatch {
            found: schema.to_string(),
        });
    }

    obj.get("entries")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or(CompileError::MissingEntries)
}
