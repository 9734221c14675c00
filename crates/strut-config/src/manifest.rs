//! The project manifest: the declarative descriptor synthesis consumes.
//!
//! The manifest is read-only input. Every field is optional; defaults are
//! fixed and documented on the field they apply to.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Entry declarations: logical-or-filename key to a relative source path,
    /// in declaration order.
    #[serde(default)]
    pub entry: IndexMap<String, String>,

    #[serde(default)]
    pub output: OutputOptions,

    #[serde(default)]
    pub resolve: ResolveOptions,

    #[serde(default, alias = "devServer")]
    pub dev_server: DevServerOptions,

    /// Source root, used for module resolution and the asset-copy plan.
    #[serde(default = "default_src")]
    pub src: PathBuf,

    /// Build mode; seeds `NODE_ENV` and is forwarded to the runtime.
    #[serde(default)]
    pub mode: Option<String>,

    /// Inline environment variables, merged over the environment file.
    #[serde(default)]
    pub env: IndexMap<String, String>,

    /// Environment-definition file, relative to the working directory.
    #[serde(default = "default_env_file", alias = "envFile")]
    pub env_file: PathBuf,

    #[serde(default)]
    pub css: CssMode,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            entry: IndexMap::new(),
            output: OutputOptions::default(),
            resolve: ResolveOptions::default(),
            dev_server: DevServerOptions::default(),
            src: default_src(),
            mode: None,
            env: IndexMap::new(),
            env_file: default_env_file(),
            css: CssMode::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Filename convention, used verbatim; extensions are appended later.
    #[serde(default)]
    pub filename: Option<String>,

    /// Output directory, relative to the working directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extra module search paths, appended after the fixed roots.
    #[serde(default)]
    pub modules: Vec<PathBuf>,

    /// Alias overrides; win over the built-in aliases on collision.
    #[serde(default)]
    pub alias: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevServerOptions {
    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub compress: Option<bool>,

    #[serde(default)]
    pub open: Option<bool>,

    /// Options forwarded to the dev server verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Styling-pipeline variant: extract styles into a dedicated output file, or
/// leave them to runtime style injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssMode {
    #[default]
    Extract,
    Inline,
}

// Helper defaults
fn default_src() -> PathBuf {
    PathBuf::from("src")
}

fn default_env_file() -> PathBuf {
    PathBuf::from(".env")
}
