use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::RepoSet;

/// Scan the immediate subdirectories of `root` for dependency manifests.
///
/// A subdirectory qualifies as a pip repo if it contains `requirements.txt`
/// and as an npm repo if it contains `package.json`; it may be both. Both
/// lists are sorted by path so report ordering is stable across runs.
pub fn discover_repos(root: &Path) -> Result<RepoSet> {
    if !root.is_dir() {
        bail!("'{}' is not a directory", root.display());
    }

    let mut repos = RepoSet::default();

    let entries = std::fs::read_dir(root)
        .with_context(|| format!("failed to read directory '{}'", root.display()))?;

    for entry in entries {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        if path.join("requirements.txt").exists() {
            repos.pip.push(path.clone());
        }
        if path.join("package.json").exists() {
            repos.npm.push(path);
        }
    }

    repos.pip.sort();
    repos.npm.sort();

    println!("Found {} repos in '{}'", repos.total(), root.display());

    Ok(repos)
}
