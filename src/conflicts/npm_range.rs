//! npm version ranges evaluated with the `semver` crate.
//!
//! npm and Cargo disagree on a few points, so a package.json range is
//! rewritten into Cargo syntax before matching:
//!
//! - a bare version (`4.18.2`) is exact in npm, `=4.18.2` here
//! - `||` separates alternatives; each side is matched on its own
//! - whitespace separates comparators that must all hold (`>=1 <2`)
//! - `a - b` is the inclusive range `>=a, <=b`
//!
//! Anything still unparseable (`latest`, dist-tags, `git+` and `file:`
//! specs, `workspace:*`) is treated as satisfied.

use semver::{Version, VersionReq};

/// Whether the installed `version` satisfies the npm `range`.
pub fn satisfies(version: &str, range: &str) -> bool {
    let Ok(version) = Version::parse(version.trim().trim_start_matches('v')) else {
        return true;
    };

    let mut alternatives = Vec::new();
    for set in range.split("||") {
        match comparator_set(set) {
            Some(req) => alternatives.push(req),
            None => return true,
        }
    }

    alternatives.iter().any(|req| req.matches(&version))
}

/// One `||`-free comparator set as a Cargo requirement.
fn comparator_set(set: &str) -> Option<VersionReq> {
    let set = set.trim();
    if set.is_empty() {
        return Some(VersionReq::STAR);
    }

    if let Some((low, high)) = set.split_once(" - ") {
        let low = bare(low.trim());
        let high = bare(high.trim());
        return VersionReq::parse(&format!(">={}, <={}", low, high)).ok();
    }

    let comparators = join_operators(set)
        .into_iter()
        .map(|token| comparator(&token))
        .collect::<Vec<_>>();

    VersionReq::parse(&comparators.join(", ")).ok()
}

/// Re-attach operators written apart from their version (`>= 1.2.0`).
fn join_operators(set: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut pending = String::new();

    for token in set.split_whitespace() {
        if token.chars().all(is_operator_char) {
            pending.push_str(token);
            continue;
        }
        tokens.push(format!("{}{}", pending, token));
        pending.clear();
    }
    if !pending.is_empty() {
        tokens.push(pending);
    }

    tokens
}

fn comparator(token: &str) -> String {
    let split = token
        .find(|c: char| !is_operator_char(c))
        .unwrap_or(token.len());
    let (op, rest) = token.split_at(split);
    let rest = bare(rest);

    match (op, rest) {
        (_, "*" | "x" | "X") => "*".to_string(),
        ("", rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => format!("={}", rest),
        (op, rest) => format!("{}{}", op, rest),
    }
}

/// Drop the optional `v` prefix npm allows (`v1.2.3`).
fn bare(version: &str) -> &str {
    match version.strip_prefix(['v', 'V']) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
        _ => version,
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '~' | '^')
}
