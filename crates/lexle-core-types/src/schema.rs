//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the log macros,
//! the importer and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_PASS_ID: &str = "pass_id";

// Seed import identifiers
pub const FIELD_FILE: &str = "file";
pub const FIELD_DIR: &str = "dir";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_CATEGORY_ID: &str = "category_id";
pub const FIELD_WORD: &str = "word";

// Counters reported at the end of a pass
pub const FIELD_FILES: &str = "files";
pub const FIELD_CATEGORIES_CREATED: &str = "categories_created";
pub const FIELD_WORDS_CREATED: &str = "words_created";
pub const FIELD_WORDS_FAILED: &str = "words_failed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_MSG: &str = "err_msg";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_SKIP: &str = "skip";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_FILE.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_SKIP.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        let names = [EVENT_START, EVENT_END, EVENT_END_ERROR, EVENT_SKIP];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
