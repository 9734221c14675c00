//! Environment merging: the `process.env.*` injection table.
//!
//! The table is seeded with `NODE_ENV` and therefore never empty. A missing
//! or unreadable environment file degrades to the seeded table with a
//! diagnostic; it never fails synthesis.

use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::manifest::Manifest;

/// Injection table: `process.env.<KEY>` to a JSON-encoded value.
pub type EnvTable = IndexMap<String, String>;

pub const DEFAULT_MODE: &str = "development";

/// Resolve the build mode: explicit manifest value, then the process
/// environment, then the fixed default.
pub fn resolve_mode(manifest: &Manifest, process_env: &BTreeMap<String, String>) -> String {
    manifest
        .mode
        .clone()
        .or_else(|| process_env.get("NODE_ENV").cloned())
        .unwrap_or_else(|| DEFAULT_MODE.to_string())
}

/// Build the injection table for the given manifest.
///
/// Merge order, later sources overwriting earlier ones in place:
/// 1. the `NODE_ENV` seed (the resolved mode)
/// 2. the environment file (`env_file`, default `.env`)
/// 3. the manifest's inline `env` map
pub fn build_env_table(root: &Path, manifest: &Manifest, mode: &str) -> EnvTable {
    let mut table = EnvTable::new();
    insert(&mut table, "NODE_ENV", mode);

    let env_path = root.join(&manifest.env_file);
    match std::fs::read_to_string(&env_path) {
        Ok(contents) => {
            for (key, value) in parse_env_file(&contents) {
                insert(&mut table, &key, &value);
            }
        }
        Err(err) => {
            warn!(
                "unable to load environment variables from `{}`: {err}",
                env_path.display()
            );
        }
    }

    for (key, value) in &manifest.env {
        insert(&mut table, key, value);
    }

    table
}

fn insert(table: &mut EnvTable, key: &str, value: &str) {
    table.insert(
        format!("process.env.{key}"),
        serde_json::Value::from(value).to_string(),
    );
}

/// Parse line-oriented `KEY=VALUE` pairs. Blank lines and `#` comments are
/// ignored; the first `=` splits; surrounding quotes on the value are
/// stripped.
fn parse_env_file(contents: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            debug!("ignoring malformed environment line {}", line_no + 1);
            continue;
        };
        pairs.push((key.trim().to_string(), unquote(value.trim()).to_string()));
    }

    pairs
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
