//! Definition file format
//!
//! One file describes one category and its words:
//!
//! ```json
//! {
//!   "name": "Fruits",
//!   "mustHint": true,
//!   "mustPresent": false,
//!   "words": [{ "word": "apple", "hint": "red", "hintLong": "a red fruit" }]
//! }
//! ```
//!
//! Only `name` is required. Unknown fields are ignored, and missing or
//! `null` fields take their zero value. Keys are also accepted in
//! PascalCase (`Name`, `MustHint`, `HintLong`) and all lowercase
//! (`musthint`, `hintlong`), as files exported by Go tooling use them.

use lexle_core::model::{NewCategory, NewWord};
use serde::{Deserialize, Deserializer, Serialize};

/// Category definition read from one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDefinition {
    /// Category name, the dedup key
    #[serde(alias = "Name")]
    pub name: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "MustHint",
        alias = "musthint"
    )]
    pub must_hint: bool,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "MustPresent",
        alias = "mustpresent"
    )]
    pub must_present: bool,

    /// Words in file order
    #[serde(default, deserialize_with = "null_as_default", alias = "Words")]
    pub words: Vec<WordDefinition>,
}

/// Word definition inside a category file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDefinition {
    #[serde(default, deserialize_with = "null_as_default", alias = "Word")]
    pub word: String,

    #[serde(default, deserialize_with = "null_as_default", alias = "Hint")]
    pub hint: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "HintLong",
        alias = "hintlong"
    )]
    pub hint_long: String,
}

impl CategoryDefinition {
    /// Write model for the category described by this file
    pub fn to_new_category(&self) -> NewCategory {
        NewCategory::new(self.name.clone(), self.must_hint, self.must_present)
    }
}

impl WordDefinition {
    /// Write model for this word under the given category
    pub fn to_new_word(&self, category_id: &str) -> NewWord {
        NewWord {
            category_id: category_id.to_string(),
            word: self.word.clone(),
            hint: self.hint.clone(),
            hint_long: self.hint_long.clone(),
        }
    }
}

/// Read `null` as the type's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_definition() {
        let json = r#"{
            "name": "Fruits",
            "mustHint": true,
            "mustPresent": false,
            "words": [
                {"word": "apple", "hint": "red", "hintLong": "a red fruit"},
                {"word": "pear", "hint": "green", "hintLong": "a green fruit"}
            ]
        }"#;

        let def: CategoryDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.name, "Fruits");
        assert!(def.must_hint);
        assert!(!def.must_present);
        assert_eq!(def.words.len(), 2);
        assert_eq!(def.words[1].hint_long, "a green fruit");
    }

    #[test]
    fn test_missing_fields_take_zero_values() {
        let json = r#"{"name": "Intle", "words": [{"word": "42"}]}"#;

        let def: CategoryDefinition = serde_json::from_str(json).unwrap();
        assert!(!def.must_hint);
        assert!(!def.must_present);
        assert_eq!(def.words[0].word, "42");
        assert_eq!(def.words[0].hint, "");
        assert_eq!(def.words[0].hint_long, "");
    }

    #[test]
    fn test_null_fields_take_zero_values() {
        let json = r#"{"name": "Floatle", "mustHint": null, "words": [{"word": "1.5", "hint": null}]}"#;

        let def: CategoryDefinition = serde_json::from_str(json).unwrap();
        assert!(!def.must_hint);
        assert_eq!(def.words[0].hint, "");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"name": "Wikipedle", "source": "dump", "words": [{"word": "Rust", "lang": "en"}]}"#;

        let def: CategoryDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.words[0].word, "Rust");
    }

    #[test]
    fn test_capitalized_keys_accepted() {
        let json = r#"{
            "Name": "Animals",
            "MustHint": true,
            "mustpresent": true,
            "Words": [{"Word": "cat", "Hint": "meows", "HintLong": "a small feline"}]
        }"#;

        let def: CategoryDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.name, "Animals");
        assert!(def.must_hint);
        assert!(def.must_present);
        assert_eq!(
            def.words,
            vec![WordDefinition {
                word: "cat".to_string(),
                hint: "meows".to_string(),
                hint_long: "a small feline".to_string(),
            }]
        );
    }

    #[test]
    fn test_name_is_required() {
        let json = r#"{"mustHint": true, "words": []}"#;
        assert!(serde_json::from_str::<CategoryDefinition>(json).is_err());
    }

    #[test]
    fn test_to_new_word_copies_verbatim() {
        let def = WordDefinition {
            word: " spaced ".to_string(),
            hint: String::new(),
            hint_long: "long".to_string(),
        };
        let new = def.to_new_word("cat-1");
        assert_eq!(new.category_id, "cat-1");
        assert_eq!(new.word, " spaced ");
        assert_eq!(new.hint, "");
        assert_eq!(new.hint_long, "long");
    }
}
