//! Synthesis entry point: manifest in, resolved configuration out.

use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::dev::{resolve_dev_server, DevServerSpec};
use crate::discovery::ManifestDiscovery;
use crate::entry::{resolve_entries, EntryMap};
use crate::env::{build_env_table, resolve_mode, EnvTable};
use crate::error::Result;
use crate::html::{build_html_plan, HtmlPlan};
use crate::manifest::Manifest;
use crate::output::{resolve_modules, resolve_output, OutputSpec, ResolveSpec};

/// Source patterns excluded from the bulk asset copy; these are bundled, not
/// copied.
const COPY_IGNORE: [&str; 5] = ["*.js", "*.scss", "*.css", "*.html", "*.map"];

/// One static-copy directive for the external runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCopy {
    pub context: PathBuf,
    pub pattern: String,
    pub ignore: Vec<String>,
}

/// The complete derived configuration. Produced once per invocation and
/// handed to the external bundler runtime; nothing here is re-read or
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub mode: String,
    pub entry: EntryMap,
    pub env: EnvTable,
    pub html: HtmlPlan,
    pub output: OutputSpec,
    pub resolve: ResolveSpec,
    pub dev_server: DevServerSpec,
    pub assets: Vec<AssetCopy>,
}

/// Immutable synthesis context: a working directory plus a
/// process-environment snapshot taken at construction. Synthesis is
/// idempotent for identical manifest contents, environment-file contents,
/// and snapshot.
pub struct Synthesizer {
    root: PathBuf,
    process_env: BTreeMap<String, String>,
}

impl Synthesizer {
    /// Create a synthesizer rooted at the given working directory. The
    /// directory should be absolute; resolved paths inherit it as-is.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            process_env: std::env::vars().collect(),
        }
    }

    /// Replace the process-environment snapshot. Tests use this to stay
    /// independent of the real environment.
    pub fn with_process_env(mut self, process_env: BTreeMap<String, String>) -> Self {
        self.process_env = process_env;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discover and load the manifest, then derive the full configuration.
    ///
    /// # Errors
    ///
    /// Fails only when no manifest is discovered or the discovered manifest
    /// is unparseable; every later stage degrades in place.
    pub fn synthesize(&self) -> Result<ResolvedConfig> {
        let manifest = ManifestDiscovery::new(&self.root).load(&self.process_env)?;
        Ok(self.from_manifest(&manifest))
    }

    /// Synthesis body, split out so callers holding an in-memory manifest
    /// can skip discovery.
    pub fn from_manifest(&self, manifest: &Manifest) -> ResolvedConfig {
        let mode = resolve_mode(manifest, &self.process_env);
        let entry = resolve_entries(&self.root, &manifest.entry);
        let env = build_env_table(&self.root, manifest, &mode);
        let html = build_html_plan(&manifest.entry);
        let output = resolve_output(&self.root, manifest);
        let resolve = resolve_modules(&self.root, manifest);
        // Last: the dev server's content root is the resolved output path.
        let dev_server = resolve_dev_server(&manifest.dev_server, &output.path);
        let assets = self.asset_plan(manifest);

        ResolvedConfig {
            mode,
            entry,
            env,
            html,
            output,
            resolve,
            dev_server,
            assets,
        }
    }

    fn asset_plan(&self, manifest: &Manifest) -> Vec<AssetCopy> {
        let context = self.root.join(&manifest.src).clean();
        vec![
            AssetCopy {
                context: context.clone(),
                pattern: "**/*".to_string(),
                ignore: COPY_IGNORE.iter().map(|glob| glob.to_string()).collect(),
            },
            AssetCopy {
                context,
                pattern: "asset/**/*".to_string(),
                ignore: Vec::new(),
            },
        ]
    }
}

/// Synthesize from the current directory (convenience wrapper).
pub fn synthesize() -> Result<ResolvedConfig> {
    let root = std::env::current_dir()?;
    Synthesizer::new(root).synthesize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_plan_copies_from_the_source_root() {
        let synthesizer =
            Synthesizer::new("/project").with_process_env(BTreeMap::new());
        let assets = synthesizer.asset_plan(&Manifest::default());

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].context, PathBuf::from("/project/src"));
        assert_eq!(assets[0].pattern, "**/*");
        assert_eq!(assets[0].ignore, COPY_IGNORE);
        assert_eq!(assets[1].pattern, "asset/**/*");
        assert!(assets[1].ignore.is_empty());
    }

    #[test]
    fn from_manifest_never_fails() {
        let synthesizer =
            Synthesizer::new("/nonexistent").with_process_env(BTreeMap::new());
        let config = synthesizer.from_manifest(&Manifest::default());

        assert_eq!(config.mode, "development");
        assert!(config.entry.is_empty());
        assert!(config.html.is_empty());
        assert_eq!(config.env.len(), 1);
    }
}
