//! Store-side constructors for `ExError`
//!
//! Every fallible function in this crate returns `ExError`, so callers see
//! one error type whether a failure came from SQLite, the filesystem or a
//! definition file.

use lexle_core::errors::{ExError, ExErrorKind};

pub type Result<T> = std::result::Result<T, ExError>;

/// A migration's SQL could not be executed
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("provision_collections")
        .with_entity_id(migration_id)
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// An applied migration no longer matches the SQL embedded in this build
pub fn checksum_mismatch(migration_id: &str, recorded: &str, embedded: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("provision_collections")
        .with_entity_id(migration_id)
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, recorded, embedded
        ))
}

/// A definition file is not valid JSON/YAML for the definition shape
pub fn definition_parse(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("definition_parse")
        .with_message(reason)
}

/// Map a rusqlite error, keeping UNIQUE and FOREIGN KEY failures distinguishable
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            ExErrorKind::ConstraintViolation
        }
        _ => ExErrorKind::Persistence,
    };

    ExError::new(kind).with_op("sqlite").with_message(err.to_string())
}

pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_message(err.to_string())
}
