use crate::errors::ExError;
use crate::model::{Category, NewCategory, NewWord, Word};

/// Typed access to the `categories` and `words` collections
///
/// The store assigns identifiers on save. Implementations are not required
/// to enforce unique category names; callers that need at most one category
/// per name must check with `find_category_by_name` first and must be the
/// only writer while doing so.
pub trait RecordStore {
    /// Look up a category by exact name
    ///
    /// Returns `Ok(None)` when no category has that name.
    fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, ExError>;

    /// Create a category and return the stored record
    fn save_category(&mut self, category: &NewCategory) -> Result<Category, ExError>;

    /// Create a word under an existing category and return the stored record
    fn save_word(&mut self, word: &NewWord) -> Result<Word, ExError>;
}
