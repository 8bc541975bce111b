//! Required-module coverage enforcement (strict configuration only)

use crate::aggregate::ModuleExportSet;
use crate::error::{CompileError, CompileResult};

/// Check that every required module appears in the aggregation with at least
/// one export.
///
/// Modules are checked in the list's declared order, so the first violation
/// in that order is the one reported. Surface modules outside the required
/// list are not this function's concern; the canonicalizer drops them.
pub(crate) fn enforce_required(modules: &ModuleExportSet, required: &[&str]) -> CompileResult<()> {
    for name in required {
        match modules.get(*name) {
            None => return Err(CompileError::MissingRequiredModule((*name).to_string())),
            Some(exports) if exports.is_empty() => {
                return Err(CompileError::EmptyRequiredModule((*name).to_string()))
            }
            Some(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn module(exports: &[&str]) -> BTreeSet<String> {
        exports.iter().map(|e| (*e).to_string()).collect()
    }

    #[test]
    fn test_enforce_passes_when_all_required_present() {
        let mut modules = ModuleExportSet::new();
        modules.insert("std/str".to_string(), module(&["trim"]));
        modules.insert("std/list".to_string(), module(&["map", "filter"]));

        assert_eq!(
            enforce_required(&modules, &["std/str", "std/list"]),
            Ok(())
        );
    }

    #[test]
    fn test_enforce_ignores_extra_modules() {
        let mut modules = ModuleExportSet::new();
        modules.insert("std/str".to_string(), module(&["trim"]));
        modules.insert("std/extra".to_string(), module(&["anything"]));

        assert_eq!(enforce_required(&modules, &["std/str"]), Ok(()));
    }

    #[test]
    fn test_enforce_fails_on_absent_module() {
        let mut modules = ModuleExportSet::new();
        modules.insert("std/str".to_string(), module(&["trim"]));

        assert_eq!(
            enforce_required(&modules, &["std/str", "std/http"]),
            Err(CompileError::MissingRequiredModule("std/http".to_string()))
        );
    }

    #[test]
    fn test_enforce_fails_on_empty_export_set() {
        let mut modules = ModuleExportSet::new();
        modules.insert("std/str".to_string(), BTreeSet::new());

        assert_eq!(
            enforce_required(&modules, &["std/str"]),
            Err(CompileError::EmptyRequiredModule("std/str".to_string()))
        );
    }

    #[test]
    fn test_enforce_reports_first_violation_in_list_order() {
        let modules = ModuleExportSet::new();

        assert_eq!(
            enforce_required(&modules, &["std/hash", "std/bytes"]),
            Err(CompileError::MissingRequiredModule("std/hash".to_string()))
        );
    }

    #[test]
    fn test_enforce_empty_required_list_is_vacuous() {
        assert_eq!(enforce_required(&ModuleExportSet::new(), &[]), Ok(()));
    }
}
