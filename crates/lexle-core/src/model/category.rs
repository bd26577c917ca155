use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields needed to create a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    /// Display name, also the dedup key used by the seed importer
    pub name: String,

    /// Players must be shown a hint for words in this category
    pub must_hint: bool,

    /// Words of this category must be present in a round
    pub must_present: bool,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, must_hint: bool, must_present: bool) -> Self {
        Self {
            name: name.into(),
            must_hint,
            must_present,
        }
    }
}

/// Persisted category record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier assigned by the store on creation (UUID v7)
    pub id: String,

    pub name: String,

    pub must_hint: bool,

    pub must_present: bool,

    /// Timestamp when the record was saved
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Materialize a saved category from its write model
    pub fn from_new(id: String, new: &NewCategory) -> Self {
        Self {
            id,
            name: new.name.clone(),
            must_hint: new.must_hint,
            must_present: new.must_present,
            created_at: Utc::now(),
        }
    }
}
