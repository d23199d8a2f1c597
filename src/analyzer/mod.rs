use std::path::Path;

use anyhow::Result;

use crate::models::DependencyRecord;

pub mod lockfile;
pub mod npm;
pub mod pip;

/// Extracts dependency records from one repository directory.
///
/// Records are emitted with an empty `commit_hash`; annotation happens in a
/// separate pass once all records exist ([`crate::git::annotate`]).
pub trait Analyzer {
    fn analyze(&self, repo: &Path) -> Result<Vec<DependencyRecord>>;
}
