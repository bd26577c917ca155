use std::collections::HashSet;

use uuid::Uuid;

use crate::errors::{ExError, LexleError, Result};
use crate::model::{
    Category, NewCategory, NewWord, Word, COLLECTION_CATEGORIES, COLLECTION_WORDS,
};
use crate::ops::record_store::RecordStore;

/// In-memory record store
///
/// Records are kept in insertion order. Not thread-safe; meant for tests and
/// for embedding the importer without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    categories: Vec<Category>,
    words: Vec<Word>,
    /// Category names whose save is refused
    rejected_categories: HashSet<String>,
    /// Word values whose save is refused
    rejected_words: HashSet<String>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every later save of a category with this exact name
    pub fn reject_category(mut self, name: impl Into<String>) -> Self {
        self.rejected_categories.insert(name.into());
        self
    }

    /// Refuse every later save of a word with this exact value
    pub fn reject_word(mut self, word: impl Into<String>) -> Self {
        self.rejected_words.insert(word.into());
        self
    }

    /// Insert a category directly, bypassing the importer
    pub fn insert_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// All categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All words in insertion order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words belonging to a category, in insertion order
    pub fn words_for(&self, category_id: &str) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|w| w.category_id == category_id)
            .collect()
    }

    /// Get a category by ID
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if no category has this ID.
    pub fn get_category(&self, id: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| LexleError::CategoryNotFound {
                category_id: id.to_string(),
            })
    }

    fn create_category(&mut self, new: &NewCategory) -> Result<Category> {
        if self.rejected_categories.contains(&new.name) {
            return Err(LexleError::SaveRejected {
                collection: COLLECTION_CATEGORIES.to_string(),
                reason: format!("category '{}' is rejected by this store", new.name),
            });
        }

        let category = Category::from_new(Uuid::now_v7().to_string(), new);
        self.categories.push(category.clone());
        Ok(category)
    }

    fn create_word(&mut self, new: &NewWord) -> Result<Word> {
        self.get_category(&new.category_id)?;

        if self.rejected_words.contains(&new.word) {
            return Err(LexleError::SaveRejected {
                collection: COLLECTION_WORDS.to_string(),
                reason: format!("word '{}' is rejected by this store", new.word),
            });
        }

        let word = Word::from_new(Uuid::now_v7().to_string(), new);
        self.words.push(word.clone());
        Ok(word)
    }
}

impl RecordStore for MemoryStore {
    fn find_category_by_name(&self, name: &str) -> std::result::Result<Option<Category>, ExError> {
        Ok(self.categories.iter().find(|c| c.name == name).cloned())
    }

    fn save_category(&mut self, new: &NewCategory) -> std::result::Result<Category, ExError> {
        Ok(self.create_category(new)?)
    }

    fn save_word(&mut self, new: &NewWord) -> std::result::Result<Word, ExError> {
        Ok(self.create_word(new)?)
    }
}
