//! HTML generation plan derived from manifest entries.
//!
//! Every manifest entry pointing at a markup template becomes one page
//! directive, bound to the script chunk of the same logical name. The plan
//! addresses the external runtime; template paths are forwarded as written.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const TEMPLATE_EXTENSION: &str = "html";

/// Ordered page directives, plus one trailing post-processing directive when
/// any page was emitted.
pub type HtmlPlan = Vec<HtmlDirective>;

/// Where generated script tags are injected in an emitted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inject {
    #[default]
    Head,
    Body,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "directive", rename_all = "kebab-case")]
#[serde(rename_all_fields = "camelCase")]
pub enum HtmlDirective {
    /// Emit one page from a template, bound to a single script chunk.
    Page {
        filename: String,
        template: PathBuf,
        inject: Inject,
        chunks: Vec<String>,
    },
    /// Mark generated script tags with a default attribute.
    ScriptAttributes { default_attribute: String },
}

pub fn build_html_plan(entries: &IndexMap<String, String>) -> HtmlPlan {
    let mut plan: HtmlPlan = entries
        .iter()
        .filter(|(_, value)| is_template(value))
        .map(|(key, value)| HtmlDirective::Page {
            filename: key.clone(),
            template: PathBuf::from(value),
            inject: Inject::Head,
            chunks: vec![key
                .strip_suffix(".html")
                .unwrap_or(key.as_str())
                .to_string()],
        })
        .collect();

    // Nothing to post-process when no pages are generated.
    if !plan.is_empty() {
        plan.push(HtmlDirective::ScriptAttributes {
            default_attribute: "defer".to_string(),
        });
    }

    plan
}

fn is_template(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == TEMPLATE_EXTENSION)
}
