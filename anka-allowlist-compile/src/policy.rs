//! The compiled allow-list policy document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Schema tag carried by every compiled policy document.
pub const POLICY_SCHEMA: &str = "fard.anka.policy.allowed_stdlib.v1";

/// Canonical allow-list policy: per module, exactly the exports the sandbox
/// layer may resolve.
///
/// The document is deterministic by construction: `modules` keys and each
/// export list are sorted ascending with no duplicates, and field order is
/// frozen as `schema`, `source`, `modules`. Serialized compactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// Output format tag, always [`POLICY_SCHEMA`].
    pub schema: String,
    /// Path of the surface document this policy was compiled from, verbatim.
    pub source: String,
    /// Module name mapped to its permitted exports, both sorted ascending.
    pub modules: BTreeMap<String, Vec<String>>,
}
