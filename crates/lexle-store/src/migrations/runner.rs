use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::{Migration, MIGRATIONS};
use lexle_core::{log_op_end, log_op_start};
use rusqlite::{Connection, OptionalExtension};
use std::time::Instant;

const OP_PROVISION: &str = "provision_collections";

/// Bring the database up to the latest schema
///
/// Returns how many migrations were newly applied. Safe to call on every
/// start: a migration already recorded is skipped, provided its recorded
/// checksum still matches the embedded SQL.
pub fn apply_migrations(conn: &mut Connection) -> Result<usize> {
    let started = Instant::now();
    log_op_start!(OP_PROVISION);

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT NOT NULL
        )",
    )
    .map_err(from_rusqlite)?;

    let mut applied = 0;
    for migration in MIGRATIONS {
        if apply_one(conn, migration)? {
            applied += 1;
        }
    }

    log_op_end!(
        OP_PROVISION,
        duration_ms = started.elapsed().as_millis() as u64,
        applied = applied as u64
    );
    Ok(applied)
}

/// Migration ids recorded in `schema_version`, oldest first
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT migration_id FROM schema_version ORDER BY id")
        .map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(from_rusqlite)?;
    let ids = rows
        .map(|row| row.map_err(from_rusqlite))
        .collect::<Result<Vec<_>>>()?;
    Ok(ids)
}

fn apply_one(conn: &mut Connection, migration: &Migration) -> Result<bool> {
    let checksum = migration.checksum();

    let recorded: Option<String> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?1",
            [migration.id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    match recorded {
        Some(stored) if stored == checksum => return Ok(false),
        Some(stored) => return Err(checksum_mismatch(migration.id, &stored, &checksum)),
        None => {}
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;
    tx.execute_batch(migration.sql)
        .map_err(|e| migration_error(migration.id, &e.to_string()))?;
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration.id, chrono::Utc::now().timestamp(), checksum],
    )
    .map_err(from_rusqlite)?;
    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(migration_id = migration.id, "Applied migration");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_database_gets_every_migration() {
        let mut conn = Connection::open_in_memory().unwrap();

        assert_eq!(apply_migrations(&mut conn).unwrap(), MIGRATIONS.len());
        assert_eq!(applied_migrations(&conn).unwrap(), vec!["001_initial_schema"]);
    }

    #[test]
    fn test_second_run_applies_nothing() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        assert_eq!(apply_migrations(&mut conn).unwrap(), 0);
        assert_eq!(applied_migrations(&conn).unwrap().len(), 1);
    }
}
