//! Placeholder substitution over parsed manifest data.
//!
//! String fields may reference process environment variables with the fixed
//! `${KEY}` pattern. Substitution runs after parsing and before
//! deserialization, on string values only; the manifest is never evaluated
//! as code. Unknown keys are left verbatim.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::BTreeMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern"));

pub(crate) fn apply(value: &mut Value, env: &BTreeMap<String, String>) {
    match value {
        Value::String(text) => {
            let replaced = PLACEHOLDER.replace_all(text, |caps: &Captures| {
                env.get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            });
            if let std::borrow::Cow::Owned(owned) = replaced {
                *text = owned;
            }
        }
        Value::Array(items) => {
            for item in items {
                apply(item, env);
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                apply(item, env);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_known_keys_in_strings() {
        let mut value = json!({ "output": { "path": "${OUT_DIR}/bundles" } });
        apply(&mut value, &env(&[("OUT_DIR", "build")]));
        assert_eq!(value["output"]["path"], json!("build/bundles"));
    }

    #[test]
    fn unknown_keys_stay_verbatim() {
        let mut value = json!("prefix-${MISSING}-suffix");
        apply(&mut value, &env(&[]));
        assert_eq!(value, json!("prefix-${MISSING}-suffix"));
    }

    #[test]
    fn recurses_into_arrays_and_objects() {
        let mut value = json!({ "resolve": { "modules": ["${EXTRA}", "lib"] } });
        apply(&mut value, &env(&[("EXTRA", "vendor")]));
        assert_eq!(value["resolve"]["modules"], json!(["vendor", "lib"]));
    }

    #[test]
    fn non_string_values_are_untouched() {
        let mut value = json!({ "port": 8080, "open": true });
        apply(&mut value, &env(&[("port", "9999")]));
        assert_eq!(value, json!({ "port": 8080, "open": true }));
    }

    #[test]
    fn bare_dollar_is_not_a_placeholder() {
        let mut value = json!("$HOME and ${1BAD}");
        apply(&mut value, &env(&[("HOME", "/root")]));
        assert_eq!(value, json!("$HOME and ${1BAD}"));
    }
}
