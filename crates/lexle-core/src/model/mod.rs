//! Domain model for the seeded hierarchy
//!
//! Two collections: categories, and the words that belong to them.
//! `New*` structs are write models (no identifier yet); `Category` and
//! `Word` are persisted records carrying the store-assigned identifier.

pub mod category;
pub mod word;

pub use category::{Category, NewCategory};
pub use word::{NewWord, Word};

/// Logical collection holding categories
pub const COLLECTION_CATEGORIES: &str = "categories";

/// Logical collection holding words
pub const COLLECTION_WORDS: &str = "words";
