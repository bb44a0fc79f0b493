//! Reading `npm list -g --depth=0` output.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// One tree entry: `├── name@version`, `` `-- name@version `` (Windows
/// code pages) or `└── @scope/name@version`.
static TREE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:──|--)\s+(?P<name>@?[^@\s]+)@(?P<version>[^\s]+)")
        .expect("TREE_ENTRY must compile")
});

/// Extract package name → version from the npm tree listing.
///
/// The first line (the global prefix path) and error text yield nothing.
pub fn parse_global_packages(listing: &str) -> BTreeMap<String, String> {
    listing
        .lines()
        .filter_map(|line| TREE_ENTRY.captures(line))
        .map(|caps| (caps["name"].to_string(), caps["version"].to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "/usr/local/lib
├── @angular/cli@17.0.3
├── corepack@0.20.0
├── npm@10.2.4 deduped
└── typescript@5.3.2";

    #[test]
    fn parses_unicode_tree() {
        let packages = parse_global_packages(LISTING);

        assert_eq!(packages.len(), 4);
        assert_eq!(packages["@angular/cli"], "17.0.3");
        assert_eq!(packages["npm"], "10.2.4");
        assert_eq!(packages["typescript"], "5.3.2");
    }

    #[test]
    fn parses_ascii_tree() {
        let packages = parse_global_packages("C:\\npm\n+-- yarn@1.22.19\n`-- pm2@5.3.0");

        assert_eq!(packages["yarn"], "1.22.19");
        assert_eq!(packages["pm2"], "5.3.0");
    }

    #[test]
    fn error_output_is_empty() {
        assert!(parse_global_packages("sh: 1: npm: not found").is_empty());
        assert!(parse_global_packages("").is_empty());
    }

    #[test]
    fn empty_global_prefix_is_empty() {
        assert!(parse_global_packages("/usr/lib\n└── (empty)").is_empty());
    }
}
