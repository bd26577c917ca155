//! Collection provisioning
//!
//! The `categories` and `words` collections are created by SQL migrations
//! compiled into the binary. Each applied migration is recorded in
//! `schema_version` together with the SHA-256 of its SQL.

mod runner;

pub use runner::{applied_migrations, apply_migrations};

use sha2::{Digest, Sha256};

/// One embedded migration
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

impl Migration {
    /// Hex SHA-256 of the SQL text
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(self.sql.as_bytes()))
    }
}

/// All migrations, in application order
pub const MIGRATIONS: &[Migration] = &[Migration {
    id: "001_initial_schema",
    sql: include_str!("../../migrations/001_initial_schema.sql"),
}];
