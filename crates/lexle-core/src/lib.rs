//! Lexle Core - domain model and shared facilities
//!
//! This crate provides:
//! - Category and Word models with their write-side counterparts
//! - The `RecordStore` trait the seed importer writes through
//! - An in-memory `MemoryStore`
//! - The structured error facility (`ExError`, `ExErrorKind`)
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

pub use lexle_core_types::schema;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, LexleError, Result};
pub use model::{Category, NewCategory, NewWord, Word};
pub use ops::{MemoryStore, RecordStore};
