use rusqlite::{Connection, ErrorCode, OptionalExtension};

use crate::error::{Result, TrackerError};
use crate::models::Account;
use crate::password::{hash_password, verify_password};

/// Inserts a new account and returns its id. The password is stored as a
/// salted digest.
pub fn create_account(conn: &Connection, username: &str, email: &str, password: &str) -> Result<i64> {
    let hash = hash_password(password);
    match conn.execute(
        "INSERT INTO users (username, email, password) VALUES (?1, ?2, ?3)",
        rusqlite::params![username, email, hash],
    ) {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Err(TrackerError::DuplicateEmail(email.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn find_account(conn: &Connection, email: &str) -> Result<Option<Account>> {
    let account = conn
        .query_row(
            "SELECT id, username, email, password FROM users WHERE email = ?1",
            [email],
            |row| {
                Ok(Account {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    email: row.get(2)?,
                    password_hash: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(account)
}

/// True iff an account with exactly this email exists and the password
/// matches its stored digest.
pub fn authenticate(conn: &Connection, email: &str, password: &str) -> Result<bool> {
    Ok(find_account(conn, email)?
        .map(|account| verify_password(password, &account.password_hash))
        .unwrap_or(false))
}

pub fn username_for_email(conn: &Connection, email: &str) -> Result<Option<String>> {
    let username = conn
        .query_row("SELECT username FROM users WHERE email = ?1", [email], |row| row.get(0))
        .optional()?;
    Ok(username)
}

pub fn count_accounts(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT count(*) FROM users", [], |r| r.get(0))?)
}
