//! SBOM writers.
//!
//! - [`csv`] — `sbom.csv`, comma-delimited with `\n` line endings.
//! - [`json`] — `sbom.json`, array of objects, 2-space indented.
//!
//! Both skip file creation entirely when there are no records to report.

pub mod csv;
pub mod json;

/// Output column / key order shared by both formats.
pub const HEADER: [&str; 5] = ["name", "version", "type", "path", "commit_hash"];
