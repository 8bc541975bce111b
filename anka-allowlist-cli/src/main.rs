//! Standalone CLI for the ANKA allow-list compiler.
//!
//! Reads a stdlib surface entries document, compiles it into the canonical
//! allow-list policy, and writes the result. All validation happens before
//! the destination is touched, so the output file is either written whole or
//! not at all.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;

use anka_allowlist_compile::Compiler;

const DEFAULT_SOURCE: &str = "ontology/stdlib_surface.v1_0.ontology.json";
const DEFAULT_DEST: &str = "spec/v1_0/anka_policy_allowed_stdlib.v1.json";

#[derive(Debug, Parser)]
#[command(
    name = "anka-allowlist",
    version,
    about = "Compiles a stdlib surface inventory into the ANKA allow-list policy document"
)]
struct Cli {
    /// Path of the surface entries document to compile.
    #[arg(default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Path the compiled policy document is written to.
    #[arg(default_value = DEFAULT_DEST)]
    dest: PathBuf,

    /// Enforce the fixed ANKA required-module list and restrict the output
    /// to exactly those modules.
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("compiling {} -> {}", cli.source.display(), cli.dest.display());

    let raw = fs::read_to_string(&cli.source)
        .with_context(|| format!("failed to read surface document {}", cli.source.display()))?;
    let surface: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("surface document {} is not valid JSON", cli.source.display()))?;

    let compiler = if cli.strict {
        Compiler::strict()
    } else {
        Compiler::permissive()
    };
    let policy = compiler.compile(&surface, &cli.source.to_string_lossy())?;

    if let Some(parent) = cli.dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create destination directory {}", parent.display())
            })?;
        }
    }

    let json = serde_json::to_string(&policy).context("failed to serialize policy document")?;
    fs::write(&cli.dest, json)
        .with_context(|| format!("failed to write policy document {}", cli.dest.display()))?;

    println!("WROTE {} modules_len {}", cli.dest.display(), policy.modules.len());
    Ok(())
}
