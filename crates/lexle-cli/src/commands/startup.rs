//! Startup hook
//!
//! Usage: lexle-cli startup [--imports <DIR>]
//!
//! Provisions the collections, then seeds categories from the imports
//! directory. Import problems are logged and never change the exit status.

use crate::config::AppConfig;
use clap::Args;
use lexle_store::{import_all, SqliteRecordStore};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct StartupArgs {
    /// Directory of category definition files
    #[arg(long, env = "LEXLE_IMPORTS_DIR", default_value = "imports")]
    pub imports: PathBuf,
}

/// Execute the startup hook
pub fn execute(config: &AppConfig, args: StartupArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = config.open_store()?;

    let report = import_all(&mut SqliteRecordStore::new(&conn), &args.imports);

    tracing::info!(
        pass_id = %report.pass_id,
        imports = %args.imports.display(),
        categories_created = report.categories_created() as u64,
        words_created = report.words_created() as u64,
        words_failed = report.words_failed() as u64,
        files_skipped = report.files_skipped() as u64,
        files_failed = report.files_failed() as u64,
        "Startup seeding complete"
    );

    println!(
        "Seeded {} categories ({} words, {} words failed); {} files already present, {} files failed",
        report.categories_created(),
        report.words_created(),
        report.words_failed(),
        report.files_skipped(),
        report.files_failed(),
    );

    Ok(())
}
