//! Manifest discovery and loading.
//!
//! Loading fails closed: a missing or unparseable manifest produces an error
//! and no configuration, never partial output.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::manifest::Manifest;
use crate::subst;

/// Dedicated manifest filename, checked first.
pub const MANIFEST_FILE: &str = "strut.toml";

/// `package.json` field holding an embedded manifest.
pub const PACKAGE_MANIFEST_KEY: &str = "strut";

pub struct ManifestDiscovery {
    root: PathBuf,
}

impl ManifestDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a manifest in the root directory.
    ///
    /// Searches in this order:
    /// 1. strut.toml
    /// 2. package.json (strut field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(MANIFEST_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_MANIFEST_KEY)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load the discovered manifest, applying placeholder substitution from
    /// the given process-environment snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no manifest is discovered, and
    /// `ConfigError::InvalidManifest` if one is discovered but unparseable.
    pub fn load(&self, process_env: &BTreeMap<String, String>) -> Result<Manifest> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        debug!("loading manifest from `{}`", path.display());

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(&path, process_env);
        }

        let content = fs::read_to_string(&path)?;
        let toml_val: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidManifest {
                field: MANIFEST_FILE.to_string(),
                hint: format!("invalid TOML syntax: {e}"),
            })?;
        let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidManifest {
            field: MANIFEST_FILE.to_string(),
            hint: format!("TOML to JSON conversion failed: {e}"),
        })?;

        from_value(value, process_env)
    }

    fn load_from_package_json(
        &self,
        path: &Path,
        process_env: &BTreeMap<String, String>,
    ) -> Result<Manifest> {
        let content = fs::read_to_string(path)?;
        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidManifest {
                field: "package.json".to_string(),
                hint: format!("invalid JSON: {e}"),
            })?;

        let field = parsed
            .get(PACKAGE_MANIFEST_KEY)
            .filter(|field| !field.is_null())
            .cloned()
            .ok_or_else(|| ConfigError::InvalidManifest {
                field: PACKAGE_MANIFEST_KEY.to_string(),
                hint: "add a non-null `strut` field to package.json".to_string(),
            })?;

        from_value(field, process_env)
    }
}

fn from_value(mut value: Value, process_env: &BTreeMap<String, String>) -> Result<Manifest> {
    subst::apply(&mut value, process_env);
    serde_json::from_value(value).map_err(|e| ConfigError::InvalidManifest {
        field: "manifest".to_string(),
        hint: e.to_string(),
    })
}
