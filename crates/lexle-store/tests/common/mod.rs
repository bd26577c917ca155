#![allow(dead_code)]

use lexle_core::errors::{ExError, ExErrorKind};
use lexle_core::model::{Category, NewCategory, NewWord, Word};
use lexle_core::ops::RecordStore;
use lexle_store::{db, migrations};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn setup_test_db() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    conn
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy fixture files into a fresh temp dir so tests can add or remove files
pub fn temp_imports(fixture_names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in fixture_names {
        fs::copy(
            fixtures_dir().join("imports").join(name),
            dir.path().join(name),
        )
        .unwrap();
    }
    dir
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Store whose lookups always fail
pub struct UnreachableStore {
    pub saves: usize,
}

impl RecordStore for UnreachableStore {
    fn find_category_by_name(&self, _name: &str) -> Result<Option<Category>, ExError> {
        Err(ExError::new(ExErrorKind::Persistence).with_message("connection refused"))
    }

    fn save_category(&mut self, new: &NewCategory) -> Result<Category, ExError> {
        self.saves += 1;
        Ok(Category::from_new("unreachable".to_string(), new))
    }

    fn save_word(&mut self, new: &NewWord) -> Result<Word, ExError> {
        self.saves += 1;
        Ok(Word::from_new("unreachable".to_string(), new))
    }
}

/// `MemoryStore` that remembers which category every `save_word` call targeted
pub struct RecordingStore {
    pub inner: lexle_core::MemoryStore,
    pub word_saves: Vec<String>,
}

impl RecordingStore {
    pub fn new(inner: lexle_core::MemoryStore) -> Self {
        Self {
            inner,
            word_saves: Vec::new(),
        }
    }
}

impl RecordStore for RecordingStore {
    fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, ExError> {
        self.inner.find_category_by_name(name)
    }

    fn save_category(&mut self, new: &NewCategory) -> Result<Category, ExError> {
        self.inner.save_category(new)
    }

    fn save_word(&mut self, new: &NewWord) -> Result<Word, ExError> {
        self.word_saves.push(new.category_id.clone());
        self.inner.save_word(new)
    }
}
