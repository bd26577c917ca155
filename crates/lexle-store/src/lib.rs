//! Lexle Store - SQLite persistence and the startup seed importer
//!
//! Provides:
//! - SQLite connection helpers
//! - Embedded migrations that provision the `categories` and `words` collections
//! - `SqliteRepo` and the `SqliteRecordStore` adapter
//! - Definition file format, parser and the idempotent seed importer

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::{SqliteRecordStore, SqliteRepo};
pub use seed::{import_all, import_one, ImportReport};
