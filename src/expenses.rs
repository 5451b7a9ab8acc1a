use rusqlite::Connection;
use tracing::warn;

use crate::error::Result;
use crate::models::{Category, Expense};

pub fn create_expense(
    conn: &Connection,
    user_email: &str,
    amount: f64,
    category: Category,
    date: &str,
    description: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO expenses (user_email, amount, category, date, description) VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![user_email, amount, category, date, description],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Expenses for one user, newest date first.
///
/// Dates are `MM/DD/YYYY` text and the ordering is plain string order, so
/// "12/31/2023" sorts ahead of "01/01/2024". Rows that fail to decode (an
/// unrecognised category, say) are logged and skipped; the total still
/// counts them.
pub fn expenses_for_user(conn: &Connection, user_email: &str) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_email, amount, category, date, description FROM expenses \
         WHERE user_email = ?1 ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt
        .query_map([user_email], |row| {
            Ok(Expense {
                id: row.get(0)?,
                user_email: row.get(1)?,
                amount: row.get(2)?,
                category: row.get(3)?,
                date: row.get(4)?,
                description: row.get(5)?,
            })
        })?
        .filter_map(|r| match r {
            Ok(expense) => Some(expense),
            Err(e) => {
                warn!(%user_email, error = %e, "skipping undecodable expense row");
                None
            }
        })
        .collect();
    Ok(rows)
}

pub fn total_for_user(conn: &Connection, user_email: &str) -> Result<f64> {
    let total: Option<f64> = conn.query_row(
        "SELECT SUM(amount) FROM expenses WHERE user_email = ?1",
        [user_email],
        |row| row.get(0),
    )?;
    Ok(total.unwrap_or(0.0))
}

pub fn count_expenses(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT count(*) FROM expenses", [], |r| r.get(0))?)
}
