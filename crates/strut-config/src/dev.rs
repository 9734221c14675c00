//! Development-server defaults and the manifest overlay.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::manifest::DevServerOptions;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSpec {
    pub compress: bool,

    pub port: u16,

    pub open: bool,

    /// Static-content root; always the resolved output directory.
    pub content_base: PathBuf,

    /// Manifest options forwarded verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Overlay manifest options onto the fixed defaults. The content root is
/// force-set afterwards so it cannot drift from the resolved output path.
pub fn resolve_dev_server(options: &DevServerOptions, output_dir: &Path) -> DevServerSpec {
    let mut extra = options.extra.clone();
    extra.shift_remove("content_base");
    extra.shift_remove("contentBase");

    DevServerSpec {
        compress: options.compress.unwrap_or(true),
        port: options.port.unwrap_or(DEFAULT_PORT),
        open: options.open.unwrap_or(true),
        content_base: output_dir.to_path_buf(),
        extra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_when_manifest_is_silent() {
        let spec = resolve_dev_server(&DevServerOptions::default(), Path::new("/project/dist"));
        assert!(spec.compress);
        assert_eq!(spec.port, DEFAULT_PORT);
        assert!(spec.open);
        assert_eq!(spec.content_base, PathBuf::from("/project/dist"));
        assert!(spec.extra.is_empty());
    }

    #[test]
    fn manifest_options_win_on_collision() {
        let options = DevServerOptions {
            port: Some(3000),
            open: Some(false),
            ..DevServerOptions::default()
        };

        let spec = resolve_dev_server(&options, Path::new("/project/dist"));
        assert_eq!(spec.port, 3000);
        assert!(!spec.open);
        assert!(spec.compress);
    }

    #[test]
    fn passthrough_options_survive_the_overlay() {
        let mut options = DevServerOptions::default();
        options.extra.insert("hot".to_string(), json!(true));

        let spec = resolve_dev_server(&options, Path::new("/project/dist"));
        assert_eq!(spec.extra.get("hot"), Some(&json!(true)));
    }

    #[test]
    fn content_base_cannot_be_overridden() {
        let mut options = DevServerOptions::default();
        options
            .extra
            .insert("contentBase".to_string(), json!("elsewhere"));
        options
            .extra
            .insert("content_base".to_string(), json!("elsewhere"));

        let spec = resolve_dev_server(&options, Path::new("/project/out"));
        assert_eq!(spec.content_base, PathBuf::from("/project/out"));
        assert!(spec.extra.is_empty());
    }
}
