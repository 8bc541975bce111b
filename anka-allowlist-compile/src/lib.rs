//! This crate provides the core business logic for the ANKA allow-list compiler:
//! - surface document schema validation
//! - per-module aggregation of exported symbols
//! - required-module coverage enforcement (strict configuration)
//! - canonical, deterministic policy document assembly
//!
//! All of it is pure and synchronous; reading and writing files belongs to
//! the CLI crate.

mod aggregate;
mod canon;
mod enforce;
mod error;
mod pipeline;
mod policy;
mod surface;

// Re-exports for a small, focused public API
pub use error::{CompileError, CompileResult};
pub use pipeline::{Compiler, REQUIRED_MODULES};
pub use policy::{PolicyDocument, POLICY_SCHEMA};
pub use surface::SURFACE_SCHEMA;
