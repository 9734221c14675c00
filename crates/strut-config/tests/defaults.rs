//! Tests for default values and edge cases.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use strut_config::{
    resolve_dev_server, resolve_output, CssMode, DevServerOptions, Manifest, Synthesizer,
    DEFAULT_FILENAME_CONVENTION, DEFAULT_MODE, DEFAULT_PORT, RESOLVE_EXTENSIONS,
    SCRIPT_EXTENSIONS,
};

#[test]
fn manifest_defaults() {
    let manifest = Manifest::default();
    assert!(manifest.entry.is_empty());
    assert_eq!(manifest.src, PathBuf::from("src"));
    assert_eq!(manifest.env_file, PathBuf::from(".env"));
    assert!(manifest.mode.is_none());
    assert!(manifest.env.is_empty());
    assert_eq!(manifest.css, CssMode::Extract);
}

#[test]
fn output_spec_defaults() {
    let spec = resolve_output(Path::new("/project"), &Manifest::default());
    assert_eq!(spec.filename_convention, DEFAULT_FILENAME_CONVENTION);
    assert_eq!(spec.filename, "[hash].[name].js");
    assert_eq!(spec.style_filename.as_deref(), Some("[hash].[name].css"));
    assert_eq!(spec.path, PathBuf::from("/project/dist"));
    assert!(spec.strict_module_errors);
}

#[test]
fn dev_server_spec_defaults() {
    let spec = resolve_dev_server(&DevServerOptions::default(), Path::new("/project/dist"));
    assert!(spec.compress);
    assert_eq!(spec.port, DEFAULT_PORT);
    assert!(spec.open);
    assert_eq!(spec.content_base, PathBuf::from("/project/dist"));
    assert!(spec.extra.is_empty());
}

#[test]
fn fixed_extension_sets() {
    assert_eq!(SCRIPT_EXTENSIONS, ["js", "css"]);
    assert_eq!(RESOLVE_EXTENSIONS, ["*", ".js", ".jsx", ".vue", ".json"]);
}

#[test]
fn default_mode_is_development() {
    assert_eq!(DEFAULT_MODE, "development");
}

#[test]
fn empty_manifest_synthesizes_a_complete_plan() {
    let synthesizer = Synthesizer::new("/project").with_process_env(BTreeMap::new());
    let config = synthesizer.from_manifest(&Manifest::default());

    assert_eq!(config.mode, DEFAULT_MODE);
    assert!(config.entry.is_empty());
    assert!(config.html.is_empty());
    assert_eq!(config.env.len(), 1);
    assert_eq!(config.output.path, PathBuf::from("/project/dist"));
    assert_eq!(
        config.resolve.modules,
        vec![
            PathBuf::from("/project/src"),
            PathBuf::from("/project/lib"),
            PathBuf::from("node_modules"),
        ]
    );
    assert_eq!(config.resolve.alias.get("vue$").unwrap(), "vue/dist/vue.esm.js");
    assert_eq!(config.dev_server.content_base, config.output.path);
    assert_eq!(config.assets.len(), 2);
}
