//! Lexle CLI
//!
//! Startup hook and maintenance commands for the Lexle word store

use clap::{Parser, Subcommand};
use lexle_core::logging_facility;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "lexle")]
#[command(about = "Lexle - word category store and startup seeding", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: config::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Provision collections and run the startup seeding pass
    Startup(commands::startup::StartupArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Category inspection
    Category(commands::category::CategoryArgs),
}

fn main() {
    let cli = Cli::parse();
    let config = config::AppConfig::from(&cli.global);

    logging_facility::init(config.log_profile);

    let result = match cli.command {
        Commands::Startup(args) => commands::startup::execute(&config, args),
        Commands::Seed(args) => commands::seed::execute(&config, args),
        Commands::Category(args) => commands::category::execute(&config, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
