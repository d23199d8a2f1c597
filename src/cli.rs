use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sbom-scan",
    about = "Scan source repositories and emit a software bill of materials",
    version
)]
pub struct Cli {
    /// Directory containing the repositories to scan
    pub path: PathBuf,
}
