//! Competing lockfile detection.
//!
//! Two package managers writing lockfiles for the same project means the
//! environment depends on which one a developer happened to run.

use std::path::Path;

use super::Conflict;

const NODE_LOCKFILES: &[(&str, &str)] = &[
    ("package-lock.json", "npm"),
    ("yarn.lock", "yarn"),
    ("pnpm-lock.yaml", "pnpm"),
    ("bun.lockb", "bun"),
];

const PYTHON_LOCKFILES: &[(&str, &str)] = &[
    ("poetry.lock", "poetry"),
    ("Pipfile.lock", "pipenv"),
    ("uv.lock", "uv"),
];

/// Node.js lockfile conflict, if more than one lockfile exists.
pub fn node_lockfile_conflict(project_root: &Path) -> Option<Conflict> {
    competing(project_root, NODE_LOCKFILES, "Node.js")
}

/// Python lockfile conflict, if more than one lockfile exists.
pub fn python_lockfile_conflict(project_root: &Path) -> Option<Conflict> {
    competing(project_root, PYTHON_LOCKFILES, "Python")
}

fn competing(project_root: &Path, candidates: &[(&str, &str)], label: &str) -> Option<Conflict> {
    let found: Vec<_> = candidates
        .iter()
        .filter(|(file, _)| project_root.join(file).is_file())
        .collect();

    if found.len() < 2 {
        return None;
    }

    let files: Vec<&str> = found.iter().map(|(f, _)| *f).collect();
    let managers: Vec<&str> = found.iter().map(|(_, m)| *m).collect();

    Some(Conflict::competing_lockfiles(
        &files,
        format!("Multiple {} lockfiles detected: {}", label, files.join(", ")),
        format!(
            "Choose one package manager ({}) and delete the other lockfiles.",
            managers.join(" or ")
        ),
    ))
}
