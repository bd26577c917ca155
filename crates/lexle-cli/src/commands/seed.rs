//! Seed import command
//!
//! Usage: lexle-cli seed import <PATH>

use crate::config::AppConfig;
use clap::{Args, Subcommand};
use lexle_store::seed::{import_all, import_one, FileOutcome};
use lexle_store::SqliteRecordStore;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a definition file or a directory of them
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to a definition file or directory
    pub path: PathBuf,
}

/// Execute seed command
pub fn execute(config: &AppConfig, args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(config, import_args),
    }
}

fn execute_import(config: &AppConfig, args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = config.open_store()?;
    let mut store = SqliteRecordStore::new(&conn);

    if args.path.is_dir() {
        let report = import_all(&mut store, &args.path);
        for file in &report.files {
            println!("{}: {}", file.file, describe(&file.outcome));
        }
    } else {
        let outcome = import_one(&mut store, &args.path);
        println!("{}: {}", args.path.display(), describe(&outcome));
    }

    Ok(())
}

fn describe(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Created {
            words_created,
            words_failed,
            ..
        } => format!(
            "imported ({} words, {} failed)",
            words_created, words_failed
        ),
        FileOutcome::Skipped { .. } => "already present".to_string(),
        FileOutcome::Failed { stage, error } => format!("failed at {}: {}", stage, error),
    }
}
