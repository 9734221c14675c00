//! Entry resolution: manifest declarations to named, absolute entry points.

use indexmap::IndexMap;
use path_clean::PathClean;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Logical entry name to absolute source path, in declaration order.
pub type EntryMap = IndexMap<String, PathBuf>;

/// File extensions recognized as bundleable entry sources.
pub const SCRIPT_EXTENSIONS: [&str; 2] = ["js", "css"];

/// Filter manifest entries to recognized script sources and resolve them.
///
/// The manifest key is the nominal entry name: its trailing script extension
/// (if any) is stripped to form the chunk name, independent of the value's
/// extension. Declarations that point at anything else are dropped, not
/// rejected.
pub fn resolve_entries(root: &Path, entries: &IndexMap<String, String>) -> EntryMap {
    let mut resolved = EntryMap::new();

    for (key, value) in entries {
        if !has_script_extension(value) {
            debug!("skipped entry `{key}` ({value}): not a script source");
            continue;
        }
        resolved.insert(chunk_name(key), root.join(value).clean());
    }

    resolved
}

fn has_script_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

/// Strip a trailing recognized script extension from a manifest key.
fn chunk_name(key: &str) -> String {
    for ext in SCRIPT_EXTENSIONS {
        if let Some(stripped) = key.strip_suffix(&format!(".{ext}")) {
            return stripped.to_string();
        }
    }
    key.to_string()
}
