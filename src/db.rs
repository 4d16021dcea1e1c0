use rusqlite::Connection;
use std::path::Path;

use crate::error::StartupError;

/// Schema steps, applied in order. `PRAGMA user_version` records how many have run.
/// None are defined yet; nothing is persisted.
pub const MIGRATIONS: &[&str] = &[];

/// Open (or create) the database file and bring it up to date. The handle is
/// closed again afterwards since no request reads or writes it.
///
/// # Errors
///
/// Will return `Err` if the file cannot be opened or a migration fails
pub fn open_and_migrate(path: &Path) -> Result<u32, StartupError> {
    let mut conn = Connection::open(path)?;
    let version = migrate(&mut conn)?;
    tracing::info!(path = %path.display(), version, "database ready");
    Ok(version)
}

/// # Errors
///
/// Will return `Err` if reading the schema version or any migration fails
pub fn migrate(conn: &mut Connection) -> Result<u32, StartupError> {
    migrate_with(conn, MIGRATIONS)
}

/// Run every step past the stored version inside one transaction.
///
/// # Errors
///
/// Will return `Err` if reading the schema version or any migration fails;
/// nothing is applied in that case.
pub fn migrate_with(conn: &mut Connection, migrations: &[&str]) -> Result<u32, StartupError> {
    let current: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let target = u32::try_from(migrations.len())
        .map_err(|_| StartupError::Config("too many migrations".to_string()))?;
    if current >= target {
        return Ok(current);
    }

    let tx = conn.transaction()?;
    for (idx, sql) in migrations.iter().enumerate().skip(current as usize) {
        tracing::debug!(step = idx + 1, "applying migration");
        tx.execute_batch(sql)?;
    }
    tx.pragma_update(None, "user_version", target)?;
    tx.commit()?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[&str] = &[
        "CREATE TABLE search (id INTEGER PRIMARY KEY, country TEXT NOT NULL);",
        "ALTER TABLE search ADD COLUMN input_date TEXT;",
    ];

    #[test]
    fn fresh_file_has_nothing_to_apply() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.db");
        assert_eq!(open_and_migrate(&path).unwrap(), 0);
        assert!(path.exists());
        assert_eq!(open_and_migrate(&path).unwrap(), 0);
    }

    #[test]
    fn steps_apply_once_and_in_order() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(migrate_with(&mut conn, &SAMPLE[..1]).unwrap(), 1);
        assert_eq!(migrate_with(&mut conn, SAMPLE).unwrap(), 2);
        assert_eq!(migrate_with(&mut conn, SAMPLE).unwrap(), 2);

        conn.execute(
            "INSERT INTO search (country, input_date) VALUES ('France', '2024-06-01')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn failed_step_rolls_back() {
        let mut conn = Connection::open_in_memory().unwrap();
        let broken = [SAMPLE[0], "NOT SQL AT ALL"];
        assert!(migrate_with(&mut conn, &broken).is_err());
        let version: u32 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, 0);
        assert!(conn.prepare("SELECT id FROM search").is_err());
    }
}
