//! Repository layer for persisting categories and words to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::{SqliteRecordStore, SqliteRepo};
