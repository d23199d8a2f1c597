//! `sbom-scan` — scan a directory of source repositories and emit an SBOM.
//!
//! # Flow
//! 1. Parse the root directory argument ([`cli`]).
//! 2. Discover pip/npm repositories ([`discover`]).
//! 3. Parse each repo's manifests into dependency records ([`analyzer`]).
//! 4. Resolve indirect npm dependencies from lockfiles ([`analyzer::lockfile`]).
//! 5. Stamp every record with its repo's latest git commit hash ([`git`]).
//! 6. Write `sbom.csv` and `sbom.json` into the scanned root ([`report`]).

mod analyzer;
mod cli;
mod discover;
mod git;
mod models;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use analyzer::lockfile::LockfileResolver;
use analyzer::npm::NpmAnalyzer;
use analyzer::pip::PipAnalyzer;
use analyzer::Analyzer;
use cli::Cli;
use git::CommitAnnotator;
use models::DependencyRecord;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                err.exit();
            }
            // Usage mismatch goes to stdout with exit code 1
            println!("{err}");
            std::process::exit(1);
        }
    };

    let repos = discover::discover_repos(&cli.path)?;

    let mut records: Vec<DependencyRecord> = Vec::new();

    let pip = PipAnalyzer::new();
    for repo in &repos.pip {
        records.extend(pip.analyze(repo)?);
    }

    let npm = NpmAnalyzer::new();
    for repo in &repos.npm {
        records.extend(npm.analyze(repo)?);
    }

    let resolver = LockfileResolver::new();
    for repo in &repos.npm {
        records.extend(resolver.analyze(repo)?);
    }

    println!("  {} {} dependencies collected", "→".cyan(), records.len());

    let mut annotator = CommitAnnotator::new();
    git::annotate(&mut records, &mut annotator);

    report::csv::write(&cli.path, &records)?;
    report::json::write(&cli.path, &records)?;

    Ok(())
}
