//! CLI configuration.

use clap::Args;
use lexle_core::errors::ExError;
use lexle_core::logging_facility::Profile;
use lexle_store::errors::io_error;
use lexle_store::{db, migrations};
use rusqlite::Connection;
use std::path::PathBuf;

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to the SQLite store.
    #[arg(long, global = true, env = "LEXLE_DB", default_value = ".lexle/store.db")]
    pub db: PathBuf,

    /// Log output profile: development (human-readable) or production (JSON).
    #[arg(
        long,
        global = true,
        env = "LEXLE_LOG_PROFILE",
        default_value = "development"
    )]
    pub log_profile: Profile,
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the SQLite store.
    pub db_path: PathBuf,
    /// Logging profile.
    pub log_profile: Profile,
}

impl From<&GlobalArgs> for AppConfig {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            db_path: args.db.clone(),
            log_profile: args.log_profile,
        }
    }
}

impl AppConfig {
    /// Open the store, enable its pragmas and provision the collections.
    pub fn open_store(&self) -> Result<Connection, ExError> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
            }
        }

        let mut conn = db::open(&self.db_path)?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;

        tracing::debug!(db = %self.db_path.display(), "Store ready");
        Ok(conn)
    }
}
