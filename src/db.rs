use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::error::{Result, TrackerError};
use crate::settings::Settings;

pub const DB_FILE: &str = "spendlog.db";

/// Bumped whenever [`SCHEMA`] changes. An older database is rebuilt from
/// scratch; a newer one is refused.
pub const SCHEMA_VERSION: i64 = 1;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_email TEXT NOT NULL,
    amount REAL NOT NULL,
    category TEXT NOT NULL,
    date TEXT NOT NULL,
    description TEXT,
    FOREIGN KEY (user_email) REFERENCES users(email)
);
";

pub fn get_connection(db_path: &Path, settings: &Settings) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    conn.busy_timeout(Duration::from_millis(settings.busy_timeout_ms))?;
    conn.pragma_update(None, "foreign_keys", settings.enforce_foreign_keys)?;
    debug!(path = %db_path.display(), fk = settings.enforce_foreign_keys, "opened database");
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    migrate_to(conn, SCHEMA_VERSION)
}

fn migrate_to(conn: &Connection, target: i64) -> Result<()> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version > target {
        return Err(TrackerError::SchemaTooNew { found: version, supported: target });
    }
    let tx = conn.unchecked_transaction()?;
    if version != 0 && version < target {
        warn!(found = version, expected = target, "outdated schema, recreating tables");
        tx.execute_batch("DROP TABLE IF EXISTS expenses; DROP TABLE IF EXISTS users;")?;
    }
    tx.execute_batch(SCHEMA)?;
    tx.pragma_update(None, "user_version", target)?;
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db"), &Settings::default()).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    fn table_names(conn: &Connection) -> Vec<String> {
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_init_db_creates_tables() {
        let (_dir, conn) = test_db();
        let tables = table_names(&conn);
        for expected in &["users", "expenses"] {
            assert!(tables.contains(&expected.to_string()), "missing table: {expected}");
        }
    }

    #[test]
    fn test_init_db_sets_user_version() {
        let (_dir, conn) = test_db();
        let version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0)).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO users (username, email, password) VALUES ('a', 'a@x.com', 'h')", [],
        ).unwrap();
        init_db(&conn).unwrap();
        let count: i64 = conn.query_row("SELECT count(*) FROM users", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 1);
    }

    fn user_count(conn: &Connection) -> i64 {
        conn.query_row("SELECT count(*) FROM users", [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn test_outdated_schema_is_rebuilt() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO users (username, email, password) VALUES ('a', 'a@x.com', 'h')", [],
        ).unwrap();
        migrate_to(&conn, SCHEMA_VERSION + 1).unwrap();
        assert_eq!(user_count(&conn), 0);
        let version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0)).unwrap();
        assert_eq!(version, SCHEMA_VERSION + 1);
        assert!(table_names(&conn).contains(&"expenses".to_string()));
    }

    #[test]
    fn test_newer_schema_is_refused_and_kept() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO users (username, email, password) VALUES ('a', 'a@x.com', 'h')", [],
        ).unwrap();
        conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1).unwrap();
        let err = init_db(&conn).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::SchemaTooNew { found, supported } if found == SCHEMA_VERSION + 1 && supported == SCHEMA_VERSION
        ));
        assert_eq!(user_count(&conn), 1);
        let version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0)).unwrap();
        assert_eq!(version, SCHEMA_VERSION + 1);
    }

    #[test]
    fn test_email_is_unique() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO users (username, email, password) VALUES ('a', 'a@x.com', 'h')", [],
        ).unwrap();
        let dup = conn.execute(
            "INSERT INTO users (username, email, password) VALUES ('b', 'a@x.com', 'h')", [],
        );
        assert!(dup.is_err());
    }

    #[test]
    fn test_foreign_keys_follow_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings { enforce_foreign_keys: true, ..Settings::default() };
        let conn = get_connection(&dir.path().join("fk.db"), &settings).unwrap();
        init_db(&conn).unwrap();
        let orphan = conn.execute(
            "INSERT INTO expenses (user_email, amount, category, date) VALUES ('nobody@x.com', 1.0, 'Food', '01/01/2024')",
            [],
        );
        assert!(orphan.is_err());

        let (_dir, lax) = test_db();
        lax.execute(
            "INSERT INTO expenses (user_email, amount, category, date) VALUES ('nobody@x.com', 1.0, 'Food', '01/01/2024')",
            [],
        ).unwrap();
    }
}
