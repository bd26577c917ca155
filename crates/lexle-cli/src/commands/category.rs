//! Category inspection command
//!
//! Usage: lexle-cli category list

use crate::config::AppConfig;
use clap::{Args, Subcommand};
use lexle_store::SqliteRepo;

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// List categories with their flags and word counts
    List,
}

/// Execute category command
pub fn execute(config: &AppConfig, args: CategoryArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        CategoryCommand::List => execute_list(config),
    }
}

fn execute_list(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let conn = config.open_store()?;

    for category in SqliteRepo::list_categories(&conn)? {
        let words = SqliteRepo::count_words_for_category(&conn, &category.id)?;
        println!(
            "{}\tmustHint={}\tmustPresent={}\twords={}",
            category.name, category.must_hint, category.must_present, words
        );
    }

    Ok(())
}
