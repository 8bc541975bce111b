//! Canonicalization of the aggregated export sets

use std::collections::BTreeMap;

use crate::aggregate::ModuleExportSet;

/// Turn the aggregation into the output `modules` mapping: keys ascending by
/// code-point order, exports ascending within each module, no duplicates.
///
/// When `keep` is given (strict configuration), modules outside that list are
/// dropped silently. Total: never fails for any aggregation.
pub(crate) fn canonicalize(
    modules: ModuleExportSet,
    keep: Option<&[&str]>,
) -> BTreeMap<String, Vec<String>> {
    modules
        .into_iter()
        .filter(|(name, _)| keep.map_or(true, |k| k.contains(&name.as_str())))
        .map(|(name, exports)| (name, exports.into_iter().collect()))
        .collect()
}
