use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One row of the SBOM. Field order is the output column/key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    /// Declared version constraint (`>=1.2.3`, `^4.17.21`, ...). `None` for a
    /// bare pip name; serializes to JSON `null` and an empty CSV field.
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub ecosystem: Ecosystem,
    /// Path of the manifest or lockfile the record came from.
    pub path: String,
    /// 40-hex git commit hash, 40 zeros if git failed, empty if git is absent.
    pub commit_hash: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Pip,
    Npm,
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Pip => write!(f, "pip"),
            Ecosystem::Npm => write!(f, "npm"),
        }
    }
}

/// Repositories found under the scan root, split by manifest kind.
/// A directory carrying both manifests appears in both lists.
#[derive(Debug, Default)]
pub struct RepoSet {
    pub pip: Vec<PathBuf>,
    pub npm: Vec<PathBuf>,
}

impl RepoSet {
    /// Total list memberships, counting dual-manifest repos twice.
    pub fn total(&self) -> usize {
        self.pip.len() + self.npm.len()
    }
}
