//! The surface-to-policy compilation pipeline
//!
//! One parameterized pipeline serves both configurations: the permissive one
//! emits every module observed in the surface, the strict one additionally
//! enforces the fixed ANKA required-module list and restricts the output to
//! exactly that list.

use log::debug;
use serde_json::Value;

use crate::aggregate::aggregate;
use crate::canon::canonicalize;
use crate::enforce::enforce_required;
use crate::error::CompileResult;
use crate::policy::{PolicyDocument, POLICY_SCHEMA};
use crate::surface::validate;

/// Modules the strict configuration requires the surface to cover, in
/// enforcement order. Fixed configuration of the ANKA sandbox policy, not
/// derived from input.
pub const REQUIRED_MODULES: &[&str] = &[
    "std/hash",
    "std/bytes",
    "std/codec",
    "std/json",
    "std/str",
    "std/record",
    "std/list",
    "std/result",
    "std/option",
    "std/trace",
    "std/artifact",
    "std/time",
    "std/fs",
    "std/http",
];

/// Compiles a surface document into a [`PolicyDocument`].
///
/// Stateless across runs; each [`Compiler::compile`] call is a single pass
/// from one surface document to one policy document or the first error
/// encountered.
#[derive(Debug, Clone)]
pub struct Compiler<'a> {
    /// Required-module list to enforce and filter by, if any.
    required: Option<&'a [&'a str]>,
}

impl<'a> Compiler<'a> {
    /// Pipeline that emits every module observed in the surface.
    pub fn permissive() -> Self {
        Self { required: None }
    }

    /// Pipeline that enforces [`REQUIRED_MODULES`] and emits exactly them.
    pub fn strict() -> Self {
        Self::with_required(REQUIRED_MODULES)
    }

    /// Pipeline enforcing and filtering by an explicit required-module list.
    pub fn with_required(required: &'a [&'a str]) -> Self {
        Self {
            required: Some(required),
        }
    }

    /// Compile one surface document into the canonical policy document.
    ///
    /// `source` is recorded verbatim in the output for provenance. All
    /// validation happens before the document is assembled, so callers can
    /// persist the result without further checks.
    pub fn compile(&self, surface: &Value, source: &str) -> CompileResult<PolicyDocument> {
        let entries = validate(surface)?;
        let modules = aggregate(entries)?;

        if let Some(required) = self.required {
            enforce_required(&modules, required)?;
        }

        let modules = canonicalize(modules, self.required);
        debug!("compiled policy with {} modules from {}", modules.len(), source);

        Ok(PolicyDocument {
            schema: POLICY_SCHEMA.to_string(),
            source: source.to_string(),
            modules,
        })
    }
}
