use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::{DependencyRecord, Ecosystem};

/// Analyzer for pip repositories: parses `requirements.txt` line by line.
///
/// Grammar: `NAME (OPERATOR VERSION)?` with OPERATOR one of
/// `==`, `>=`, `<=`, `~=`, `>`, `<`. Compound specifiers like `>=1.0,<2.0`
/// keep only the first comparison clause.
pub struct PipAnalyzer;

impl PipAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for PipAnalyzer {
    fn analyze(&self, repo: &Path) -> Result<Vec<DependencyRecord>> {
        let requirements = repo.join("requirements.txt");
        let content = std::fs::read_to_string(&requirements)
            .with_context(|| format!("failed to read '{}'", requirements.display()))?;

        let spec_re = Regex::new(r"^([^<=>~\s]+)\s*(==|>=|<=|~=|>|<)\s*([^,;\s]+)")?;
        let bare_re = Regex::new(r"^[^<=>~\s]+$")?;

        let path = requirements.display().to_string();
        let mut records = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            // Comment lines and pip options (-r, -e, --index-url) are not dependencies
            if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
                continue;
            }

            // Strip inline comments
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let (name, version) = if let Some(caps) = spec_re.captures(line) {
                (caps[1].to_string(), Some(format!("{}{}", &caps[2], &caps[3])))
            } else if bare_re.is_match(line) {
                (line.to_string(), None)
            } else {
                // Unparseable line (environment markers, URLs, ...) — skip
                continue;
            };

            records.push(DependencyRecord {
                name,
                version,
                ecosystem: Ecosystem::Pip,
                path: path.clone(),
                commit_hash: String::new(),
            });
        }

        Ok(records)
    }
}
