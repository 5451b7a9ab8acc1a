use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::accounts;
use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::expenses;
use crate::models::{Category, Expense};
use crate::settings::Settings;

/// Account and expense persistence over one long-lived SQLite connection.
///
/// Writes report failures. Reads never fail outwardly: a storage error is
/// logged and the call answers with an empty result (`false`, `""`, no
/// rows, `0.0`). The strict variants live in [`accounts`] and [`expenses`].
pub struct Tracker {
    conn: Connection,
}

impl Tracker {
    /// Opens the database named by `settings`, creating the data directory
    /// and schema as needed.
    pub fn open(settings: &Settings) -> Result<Self> {
        std::fs::create_dir_all(&settings.data_dir)?;
        Self::open_at(&settings.db_path(), settings)
    }

    pub fn open_at(db_path: &Path, settings: &Settings) -> Result<Self> {
        let conn = get_connection(db_path, settings)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn create_account(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let result = accounts::create_account(&self.conn, username, email, password);
        debug!(%email, ok = result.is_ok(), "create account");
        result.map(|_| ())
    }

    pub fn authenticate(&self, email: &str, password: &str) -> bool {
        let ok = accounts::authenticate(&self.conn, email, password).unwrap_or_else(|e| {
            warn!(%email, error = %e, "authenticate failed");
            false
        });
        debug!(%email, ok, "authenticate");
        ok
    }

    pub fn username_for_email(&self, email: &str) -> String {
        accounts::username_for_email(&self.conn, email)
            .unwrap_or_else(|e| {
                warn!(%email, error = %e, "username lookup failed");
                None
            })
            .unwrap_or_default()
    }

    pub fn create_expense(
        &self,
        user_email: &str,
        amount: f64,
        category: Category,
        date: &str,
        description: Option<&str>,
    ) -> Result<i64> {
        let result = expenses::create_expense(&self.conn, user_email, amount, category, date, description);
        debug!(%user_email, amount, %category, ok = result.is_ok(), "create expense");
        result
    }

    pub fn expenses_for_user(&self, user_email: &str) -> Vec<Expense> {
        let rows = expenses::expenses_for_user(&self.conn, user_email).unwrap_or_else(|e| {
            warn!(%user_email, error = %e, "listing expenses failed");
            Vec::new()
        });
        debug!(%user_email, count = rows.len(), "list expenses");
        rows
    }

    pub fn total_for_user(&self, user_email: &str) -> f64 {
        expenses::total_for_user(&self.conn, user_email).unwrap_or_else(|e| {
            warn!(%user_email, error = %e, "total failed");
            0.0
        })
    }
}
