use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::models::DependencyRecord;
use crate::report::HEADER;

/// Write `sbom.csv` into `root`. Skipped (with a log line) when there are
/// no records, so an empty run never leaves a header-only file behind.
pub fn write(root: &Path, records: &[DependencyRecord]) -> Result<()> {
    if records.is_empty() {
        println!("No dependencies found, skipping CSV SBOM creation");
        return Ok(());
    }

    let save_path = root.join("sbom.csv");

    let mut out = String::new();
    out.push_str(&HEADER.join(","));
    out.push('\n');

    for record in records {
        let row = [
            record.name.as_str(),
            record.version.as_deref().unwrap_or(""),
            &record.ecosystem.to_string(),
            record.path.as_str(),
            record.commit_hash.as_str(),
        ]
        .map(field)
        .join(",");
        out.push_str(&row);
        out.push('\n');
    }

    std::fs::write(&save_path, out)
        .with_context(|| format!("failed to write '{}'", save_path.display()))?;

    println!(
        "Saved SBOM in CSV format to '{}'",
        save_path.display().to_string().green()
    );
    Ok(())
}

/// Quote a field only when it needs it: embedded comma, quote, or newline.
fn field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
