//! Entry aggregation: grouping surface entries into per-module export sets

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde_json::Value;

use crate::error::{CompileError, CompileResult};

/// Intermediate aggregation result: module name mapped to its export names.
///
/// Ordered containers are used deliberately so that canonical ordering is a
/// property of the data structure rather than of iteration order.
pub(crate) type ModuleExportSet = BTreeMap<String, BTreeSet<String>>;

/// Fold the validated entries sequence into a [`ModuleExportSet`].
///
/// Each entry must be an object with string `module` and `export` fields.
/// Duplicate `(module, export)` pairs collapse; set insertion is commutative,
/// so permuting the input sequence cannot change the result.
pub(crate) fn aggregate(entries: &[Value]) -> CompileResult<ModuleExportSet> {
    let mut modules = ModuleExportSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let obj = entry.as_object().ok_or(CompileError::MalformedEntry {
            index,
            reason: "entry is not an object",
        })?;
        let module = obj
            .get("module")
            .and_then(Value::as_str)
            .ok_or(CompileError::MalformedEntry {
                index,
                reason: "module is not a string",
            })?;
        let export = obj
            .get("export")
            .and_then(Value::as_str)
            .ok_or(CompileError::MalformedEntry {
                index,
                reason: "export is not a string",
            })?;

        modules
            .entry(module.to_string())
            .or_default()
            .insert(export.to_string());
    }

    debug!(
        "aggregated {} entries into {} modules",
        entries.len(),
        modules.len()
    );

    Ok(modules)
}
