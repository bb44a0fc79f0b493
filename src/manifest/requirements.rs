//! pip `requirements.txt` parsing.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// `name[extras] <spec>`: the name stops at the first operator, bracket,
/// marker, URL reference or whitespace.
static REQUIREMENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[A-Za-z0-9][A-Za-z0-9._-]*)\s*(?:\[[^\]]*\])?\s*(?P<spec>[^;]*)")
        .expect("REQUIREMENT_LINE must compile")
});

/// A `#` at the start of a line or after any whitespace starts a comment.
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)#").expect("COMMENT must compile"));

/// Parse requirements content into a map of lower-cased package name to
/// pinned version.
///
/// Only an exact `==` pin yields a version; every other specifier
/// (`>=`, `~=`, `!=`, wildcards, URLs) records the package with no version,
/// meaning "must be installed".
pub fn parse_requirements(content: &str) -> BTreeMap<String, Option<String>> {
    let mut deps = BTreeMap::new();

    for raw in content.lines() {
        let line = strip_comment(raw).trim();
        if line.is_empty() || line.starts_with('-') {
            continue;
        }

        let Some(caps) = REQUIREMENT_LINE.captures(line) else {
            tracing::debug!("Skipping unrecognised requirement line: {}", line);
            continue;
        };

        let name = normalize_name(&caps["name"]);
        let pin = exact_pin(caps["spec"].trim());
        deps.insert(name, pin);
    }

    deps
}

/// Canonical package name: lower-case with `_` and `.` folded to `-`, so
/// `PyYAML`, `typing_extensions` and `zope.interface` compare the same way
/// pip reports them.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(['_', '.'], "-")
}

fn strip_comment(line: &str) -> &str {
    match COMMENT.find(line) {
        Some(m) => &line[..m.start()],
        None => line,
    }
}

fn exact_pin(spec: &str) -> Option<String> {
    let version = spec.strip_prefix("==")?;
    if version.starts_with('=') {
        // `===` arbitrary equality
        return None;
    }
    let version = version.trim();
    if version.is_empty() || version.contains([',', '*', ' ']) {
        return None;
    }
    Some(version.to_string())
}
