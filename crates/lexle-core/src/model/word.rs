use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields needed to create a word
///
/// `category_id` must name a category that already exists in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWord {
    pub category_id: String,
    pub word: String,
    pub hint: String,
    pub hint_long: String,
}

/// Persisted word record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Identifier assigned by the store on creation (UUID v7)
    pub id: String,

    /// Owning category (non-owning reference)
    pub category_id: String,

    pub word: String,

    /// Short hint, may be empty
    pub hint: String,

    /// Long-form hint, may be empty
    pub hint_long: String,

    pub created_at: DateTime<Utc>,
}

impl Word {
    pub fn from_new(id: String, new: &NewWord) -> Self {
        Self {
            id,
            category_id: new.category_id.clone(),
            word: new.word.clone(),
            hint: new.hint.clone(),
            hint_long: new.hint_long.clone(),
            created_at: Utc::now(),
        }
    }
}
