use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::{DependencyRecord, Ecosystem};

/// Analyzer for npm repositories: reads the `dependencies` map of
/// `package.json`. Version ranges are kept exactly as declared.
pub struct NpmAnalyzer;

impl NpmAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for NpmAnalyzer {
    fn analyze(&self, repo: &Path) -> Result<Vec<DependencyRecord>> {
        let manifest = repo.join("package.json");
        let content = std::fs::read_to_string(&manifest)
            .with_context(|| format!("failed to read '{}'", manifest.display()))?;

        // Malformed package.json aborts the whole run
        let json: Value = serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in '{}'", manifest.display()))?;

        let path = manifest.display().to_string();
        let mut records = Vec::new();

        if let Some(deps) = json.get("dependencies").and_then(Value::as_object) {
            for (name, range) in deps {
                records.push(DependencyRecord {
                    name: name.clone(),
                    version: Some(range.as_str().unwrap_or("").to_string()),
                    ecosystem: Ecosystem::Npm,
                    path: path.clone(),
                    commit_hash: String::new(),
                });
            }
        }

        Ok(records)
    }
}
