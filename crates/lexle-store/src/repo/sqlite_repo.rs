//! SQLite repository implementation
//!
//! Reads and writes the `categories` and `words` tables

use crate::errors::{from_rusqlite, Result};
use lexle_core::errors::ExError;
use lexle_core::model::{Category, NewCategory, NewWord, Word};
use lexle_core::ops::RecordStore;
use rusqlite::{Connection, OptionalExtension, Row};
use uuid::Uuid;

const CATEGORY_COLUMNS: &str = "id, name, must_hint, must_present, created_at";
const WORD_COLUMNS: &str = "id, category_id, word, hint, hint_long, created_at";

/// SQLite repository for categories and words
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a category row
    ///
    /// Fails with a constraint violation if the name is already taken.
    pub fn insert_category(conn: &Connection, category: &Category) -> Result<()> {
        conn.execute(
            "INSERT INTO categories (id, name, must_hint, must_present, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                category.id,
                category.name,
                if category.must_hint { 1 } else { 0 },
                if category.must_present { 1 } else { 0 },
                category.created_at.timestamp(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Insert a word row
    ///
    /// Fails with a constraint violation if the owning category is missing.
    pub fn insert_word(conn: &Connection, word: &Word) -> Result<()> {
        conn.execute(
            "INSERT INTO words (id, category_id, word, hint, hint_long, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                word.id,
                word.category_id,
                word.word,
                word.hint,
                word.hint_long,
                word.created_at.timestamp(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Find a category by exact name
    pub fn find_category_by_name(conn: &Connection, name: &str) -> Result<Option<Category>> {
        conn.query_row(
            &format!("SELECT {} FROM categories WHERE name = ?", CATEGORY_COLUMNS),
            [name],
            category_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a category by ID
    pub fn get_category(conn: &Connection, category_id: &str) -> Result<Option<Category>> {
        conn.query_row(
            &format!("SELECT {} FROM categories WHERE id = ?", CATEGORY_COLUMNS),
            [category_id],
            category_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all categories ordered by name
    pub fn list_categories(conn: &Connection) -> Result<Vec<Category>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM categories ORDER BY name",
                CATEGORY_COLUMNS
            ))
            .map_err(from_rusqlite)?;
        let categories = stmt
            .query_map([], category_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(categories)
    }

    /// List the words of a category in insertion order
    pub fn list_words_for_category(conn: &Connection, category_id: &str) -> Result<Vec<Word>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM words WHERE category_id = ? ORDER BY rowid",
                WORD_COLUMNS
            ))
            .map_err(from_rusqlite)?;
        let words = stmt
            .query_map([category_id], word_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(words)
    }

    /// Count category rows
    pub fn count_categories(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    /// Count word rows across all categories
    pub fn count_words(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    /// Count the words of one category
    pub fn count_words_for_category(conn: &Connection, category_id: &str) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM words WHERE category_id = ?",
            [category_id],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    let must_hint: i64 = row.get(2)?;
    let must_present: i64 = row.get(3)?;
    let created_at: i64 = row.get(4)?;

    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        must_hint: must_hint != 0,
        must_present: must_present != 0,
        created_at: chrono::DateTime::from_timestamp(created_at, 0)
            .unwrap_or_else(chrono::Utc::now),
    })
}

fn word_from_row(row: &Row<'_>) -> rusqlite::Result<Word> {
    let created_at: i64 = row.get(5)?;

    Ok(Word {
        id: row.get(0)?,
        category_id: row.get(1)?,
        word: row.get(2)?,
        hint: row.get(3)?,
        hint_long: row.get(4)?,
        created_at: chrono::DateTime::from_timestamp(created_at, 0)
            .unwrap_or_else(chrono::Utc::now),
    })
}

/// `RecordStore` backed by a SQLite connection
///
/// Every save is its own implicit transaction; nothing is rolled back when a
/// later save fails.
pub struct SqliteRecordStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteRecordStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl RecordStore for SqliteRecordStore<'_> {
    fn find_category_by_name(&self, name: &str) -> std::result::Result<Option<Category>, ExError> {
        SqliteRepo::find_category_by_name(self.conn, name)
    }

    fn save_category(&mut self, new: &NewCategory) -> std::result::Result<Category, ExError> {
        let category = Category::from_new(Uuid::now_v7().to_string(), new);
        SqliteRepo::insert_category(self.conn, &category)
            .map_err(|e| e.with_entity_id(&category.name))?;
        Ok(category)
    }

    fn save_word(&mut self, new: &NewWord) -> std::result::Result<Word, ExError> {
        let word = Word::from_new(Uuid::now_v7().to_string(), new);
        SqliteRepo::insert_word(self.conn, &word).map_err(|e| e.with_entity_id(&word.word))?;
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, migrations};
    use lexle_core::errors::ExErrorKind;

    fn setup_test_db() -> Connection {
        let mut conn = db::open_in_memory().unwrap();
        db::configure(&conn).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    fn new_word(category_id: &str, word: &str) -> NewWord {
        NewWord {
            category_id: category_id.to_string(),
            word: word.to_string(),
            hint: "h".to_string(),
            hint_long: "long h".to_string(),
        }
    }

    #[test]
    fn test_category_round_trip() {
        let conn = setup_test_db();
        let mut store = SqliteRecordStore::new(&conn);

        let saved = store
            .save_category(&NewCategory::new("Fruits", true, false))
            .unwrap();
        let loaded = SqliteRepo::get_category(&conn, &saved.id).unwrap().unwrap();

        assert_eq!(loaded.name, "Fruits");
        assert!(loaded.must_hint);
        assert!(!loaded.must_present);
        assert_eq!(loaded.created_at.timestamp(), saved.created_at.timestamp());
    }

    #[test]
    fn test_find_by_name_absent() {
        let conn = setup_test_db();
        let store = SqliteRecordStore::new(&conn);
        assert!(store.find_category_by_name("Nope").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_name_is_constraint_violation() {
        let conn = setup_test_db();
        let mut store = SqliteRecordStore::new(&conn);

        store
            .save_category(&NewCategory::new("Animals", false, false))
            .unwrap();
        let err = store
            .save_category(&NewCategory::new("Animals", true, true))
            .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert_eq!(err.entity_id(), Some("Animals"));
        assert_eq!(SqliteRepo::count_categories(&conn).unwrap(), 1);
    }

    #[test]
    fn test_word_requires_existing_category() {
        let conn = setup_test_db();
        let mut store = SqliteRecordStore::new(&conn);

        let err = store.save_word(&new_word("no-such-category", "apple")).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert_eq!(SqliteRepo::count_words(&conn).unwrap(), 0);
    }

    #[test]
    fn test_words_listed_in_insertion_order() {
        let conn = setup_test_db();
        let mut store = SqliteRecordStore::new(&conn);
        let cat = store
            .save_category(&NewCategory::new("Letters", false, false))
            .unwrap();

        for w in ["zeta", "alpha", "mu"] {
            store.save_word(&new_word(&cat.id, w)).unwrap();
        }

        let words: Vec<String> = SqliteRepo::list_words_for_category(&conn, &cat.id)
            .unwrap()
            .into_iter()
            .map(|w| w.word)
            .collect();
        assert_eq!(words, vec!["zeta", "alpha", "mu"]);
        assert_eq!(SqliteRepo::count_words_for_category(&conn, &cat.id).unwrap(), 3);
    }
}
