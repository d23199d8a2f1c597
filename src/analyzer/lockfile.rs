use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;

use crate::models::{DependencyRecord, Ecosystem};

/// Resolver for indirect npm dependencies: walks the flattened `packages`
/// map of `package-lock.json` (v2/v3) and emits every non-dev entry whose
/// name is not declared at the lockfile root.
///
/// Names are keyed by the segment after the last `node_modules/` separator,
/// so a nested copy of a direct dependency (installed at a distinct version
/// under another package's own `node_modules/`) counts as direct and is not
/// emitted. Known limitation.
pub struct LockfileResolver;

impl LockfileResolver {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for LockfileResolver {
    fn analyze(&self, repo: &Path) -> Result<Vec<DependencyRecord>> {
        let lock = repo.join("package-lock.json");
        if !lock.exists() {
            println!(
                "{} package-lock.json not found at '{}', skipping indirect dependencies",
                "warning:".yellow(),
                lock.display()
            );
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&lock)
            .with_context(|| format!("failed to read '{}'", lock.display()))?;
        let json: Value = serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in '{}'", lock.display()))?;

        let Some(packages) = json.get("packages").and_then(Value::as_object) else {
            return Ok(Vec::new());
        };

        // Root entry ("" key) declares the direct dependency set
        let direct: HashSet<&str> = packages
            .get("")
            .and_then(|root| root.get("dependencies"))
            .and_then(Value::as_object)
            .map(|deps| deps.keys().map(String::as_str).collect())
            .unwrap_or_default();

        let path = lock.display().to_string();
        let mut records = Vec::new();

        for (install_path, info) in packages {
            if install_path.is_empty() {
                continue;
            }
            if info.get("dev").and_then(Value::as_bool) == Some(true) {
                continue;
            }

            let name = install_path
                .rsplit("node_modules/")
                .next()
                .unwrap_or(install_path);
            if direct.contains(name) {
                continue;
            }

            let version = info.get("version").and_then(Value::as_str).unwrap_or("");
            records.push(DependencyRecord {
                name: name.to_string(),
                version: Some(version.to_string()),
                ecosystem: Ecosystem::Npm,
                path: path.clone(),
                commit_hash: String::new(),
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use std::fs;
    use tempfile::TempDir;

    fn analyze(lock_json: &str) -> Vec<DependencyRecord> {
        let repo = TempDir::new().unwrap();
        fs::write(repo.path().join("package-lock.json"), lock_json).unwrap();
        LockfileResolver::new().analyze(repo.path()).unwrap()
    }

    #[test]
    fn test_emits_indirect_but_not_direct() {
        let records = analyze(
            r#"{
  "lockfileVersion": 3,
  "packages": {
    "": { "dependencies": { "lodash": "^4.17.21" } },
    "node_modules/lodash": { "version": "4.17.21" },
    "node_modules/lodash/node_modules/semver": { "version": "7.0.0" }
  }
}"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "semver");
        assert_eq!(records[0].version.as_deref(), Some("7.0.0"));
        assert_eq!(records[0].ecosystem, Ecosystem::Npm);
    }

    #[test]
    fn test_dev_entries_are_skipped() {
        let records = analyze(
            r#"{
  "packages": {
    "": { "dependencies": {} },
    "node_modules/jest": { "version": "29.0.0", "dev": true },
    "node_modules/ms": { "version": "2.1.3" }
  }
}"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "ms");
    }

    #[test]
    fn test_scoped_package_name_keeps_scope() {
        let records = analyze(
            r#"{
  "packages": {
    "": { "dependencies": {} },
    "node_modules/@babel/core": { "version": "7.23.0" }
  }
}"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "@babel/core");
    }

    #[test]
    fn test_missing_version_becomes_empty_string() {
        let records = analyze(
            r#"{
  "packages": {
    "": {},
    "node_modules/ms": {}
  }
}"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].version.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_lockfile_is_recoverable() {
        let repo = TempDir::new().unwrap();
        let records = LockfileResolver::new().analyze(repo.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_lockfile_json_is_fatal() {
        let repo = TempDir::new().unwrap();
        fs::write(repo.path().join("package-lock.json"), "{ nope").unwrap();
        assert!(LockfileResolver::new().analyze(repo.path()).is_err());
    }
}
