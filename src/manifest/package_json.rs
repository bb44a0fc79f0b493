//! npm `package.json` parsing.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
}

/// Parse the `dependencies` object of a `package.json` document.
///
/// Only runtime `dependencies` are considered. Non-string specs (which
/// npm rejects anyway) are kept as their JSON text so they still show up
/// in conflict messages.
pub fn parse_package_json(content: &str) -> Result<BTreeMap<String, String>, serde_json::Error> {
    let manifest: PackageJson = serde_json::from_str(content)?;

    Ok(manifest
        .dependencies
        .into_iter()
        .map(|(name, spec)| {
            let spec = match spec {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (name, spec)
        })
        .collect())
}
