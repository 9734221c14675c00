//! Output-path and module-resolution normalization.

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::manifest::{CssMode, Manifest};

pub const DEFAULT_FILENAME_CONVENTION: &str = "[hash].[name]";
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Secondary source root searched after `src`.
pub const LIBRARY_ROOT: &str = "lib";

/// Package-root marker; always the last search path.
pub const PACKAGE_ROOT: &str = "node_modules";

/// Recognized import extensions, wildcard first.
pub const RESOLVE_EXTENSIONS: [&str; 5] = ["*", ".js", ".jsx", ".vue", ".json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    /// The convention as configured, without an extension.
    pub filename_convention: String,

    /// Script output filename (convention plus `.js`).
    pub filename: String,

    /// Extracted-style output filename (convention plus `.css`); absent in
    /// inline styling mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_filename: Option<String>,

    /// Absolute output directory.
    pub path: PathBuf,

    pub strict_module_errors: bool,
}

pub fn resolve_output(root: &Path, manifest: &Manifest) -> OutputSpec {
    let convention = manifest
        .output
        .filename
        .clone()
        .unwrap_or_else(|| DEFAULT_FILENAME_CONVENTION.to_string());
    let dir = manifest
        .output
        .path
        .as_deref()
        .unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));

    OutputSpec {
        filename: format!("{convention}.js"),
        style_filename: (manifest.css == CssMode::Extract).then(|| format!("{convention}.css")),
        path: root.join(dir).clean(),
        strict_module_errors: true,
        filename_convention: convention,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveSpec {
    /// Module search paths: source root, library root, manifest extras, then
    /// the package-root marker, deduplicated keeping the first occurrence.
    pub modules: Vec<PathBuf>,

    pub extensions: Vec<String>,

    pub alias: IndexMap<String, String>,
}

pub fn resolve_modules(root: &Path, manifest: &Manifest) -> ResolveSpec {
    let mut modules = vec![root.join(&manifest.src).clean(), root.join(LIBRARY_ROOT).clean()];
    for extra in &manifest.resolve.modules {
        if extra.as_os_str() == PACKAGE_ROOT || extra.is_absolute() {
            modules.push(extra.clone());
        } else {
            modules.push(root.join(extra).clean());
        }
    }
    modules.push(PathBuf::from(PACKAGE_ROOT));

    let mut deduped: Vec<PathBuf> = Vec::with_capacity(modules.len());
    for module in modules {
        if !deduped.contains(&module) {
            deduped.push(module);
        }
    }

    let mut alias = default_aliases();
    for (key, value) in &manifest.resolve.alias {
        alias.insert(key.clone(), value.clone());
    }

    ResolveSpec {
        modules: deduped,
        extensions: RESOLVE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        alias,
    }
}

fn default_aliases() -> IndexMap<String, String> {
    IndexMap::from([("vue$".to_string(), "vue/dist/vue.esm.js".to_string())])
}
