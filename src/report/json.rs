use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::models::DependencyRecord;

/// Write `sbom.json` into `root`: an array of objects with the same keys as
/// the CSV header, 2-space indented. Skipped when there are no records.
pub fn write(root: &Path, records: &[DependencyRecord]) -> Result<()> {
    if records.is_empty() {
        println!("No dependencies found, skipping JSON SBOM creation");
        return Ok(());
    }

    let save_path = root.join("sbom.json");
    let content = serde_json::to_string_pretty(records)?;

    std::fs::write(&save_path, content)
        .with_context(|| format!("failed to write '{}'", save_path.display()))?;

    println!(
        "Saved SBOM in JSON format to '{}'",
        save_path.display().to_string().green()
    );
    Ok(())
}
