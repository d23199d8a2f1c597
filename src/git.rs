use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use colored::Colorize;

use crate::models::DependencyRecord;

/// Hash substituted when git exits non-zero; keeps the 40-character shape.
pub const ZERO_HASH: &str = "0000000000000000000000000000000000000000";

/// Looks up the latest commit hash of a repository, memoized per path
/// for the duration of the run.
#[derive(Default)]
pub struct CommitAnnotator {
    cache: HashMap<PathBuf, String>,
}

impl CommitAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit_hash(&mut self, repo: &Path) -> String {
        if let Some(hash) = self.cache.get(repo) {
            return hash.clone();
        }
        let hash = lookup_commit_hash(repo);
        self.cache.insert(repo.to_path_buf(), hash.clone());
        hash
    }
}

/// Stamp every record with the commit hash of its owning repository,
/// taken as the parent directory of the record's manifest path.
pub fn annotate(records: &mut [DependencyRecord], annotator: &mut CommitAnnotator) {
    for record in records {
        let repo = Path::new(&record.path)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        record.commit_hash = annotator.commit_hash(&repo);
    }
}

fn lookup_commit_hash(repo: &Path) -> String {
    let output = Command::new("git")
        .args(["log", "--format=%H", "-n", "1"])
        .current_dir(repo)
        .output();

    match output {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_string(),
        Ok(out) => {
            println!(
                "{} git command failed in '{}'",
                "error:".red(),
                repo.display()
            );
            println!("{}", String::from_utf8_lossy(&out.stderr).trim());
            ZERO_HASH.to_string()
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            println!(
                "{} 'git' is not found, cannot determine commit hash",
                "warning:".yellow()
            );
            String::new()
        }
        Err(err) => {
            println!(
                "{} failed to run git in '{}': {}",
                "error:".red(),
                repo.display(),
                err
            );
            ZERO_HASH.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ecosystem;
    use tempfile::TempDir;

    fn git(repo: &Path, args: &[&str]) {
        Command::new("git")
            .args(args)
            .current_dir(repo)
            .output()
            .unwrap();
    }

    #[test]
    fn test_repo_without_commits_yields_sentinel() {
        let repo = TempDir::new().unwrap();
        git(repo.path(), &["init"]);
        let hash = CommitAnnotator::new().commit_hash(repo.path());
        assert_eq!(hash, ZERO_HASH);
    }

    #[test]
    fn test_repo_with_commit_yields_full_hash() {
        let repo = TempDir::new().unwrap();
        git(repo.path(), &["init"]);
        git(
            repo.path(),
            &[
                "-c",
                "user.name=test",
                "-c",
                "user.email=test@example.com",
                "commit",
                "--allow-empty",
                "-m",
                "initial",
            ],
        );
        let hash = CommitAnnotator::new().commit_hash(repo.path());
        assert_eq!(hash.len(), 40);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_annotate_stamps_every_record_from_manifest_parent() {
        let repo = TempDir::new().unwrap();
        git(repo.path(), &["init"]);

        let manifest = repo.path().join("requirements.txt");
        let mut records = vec![DependencyRecord {
            name: "flask".to_string(),
            version: None,
            ecosystem: Ecosystem::Pip,
            path: manifest.display().to_string(),
            commit_hash: String::new(),
        }];

        annotate(&mut records, &mut CommitAnnotator::new());
        assert_eq!(records[0].commit_hash, ZERO_HASH);
    }
}
