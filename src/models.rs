use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::error::TrackerError;

#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Encoded salted digest, see [`crate::password`].
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub user_email: String,
    pub amount: f64,
    pub category: Category,
    /// `MM/DD/YYYY`, stored and sorted as plain text.
    pub date: String,
    pub description: Option<String>,
}

/// The fixed set of expense categories offered when adding an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Bills,
    Shopping,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Bills,
        Category::Shopping,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    /// Accepts the display name in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TrackerError::UnknownCategory(s.to_string()))
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        // Stored rows were written from the display names, so match exactly.
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown category: {text}").into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" BILLS ".parse::<Category>().unwrap(), Category::Bills);
        assert_eq!("Entertainment".parse::<Category>().unwrap(), Category::Entertainment);
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert!(matches!(err, TrackerError::UnknownCategory(ref s) if s == "Groceries"));
    }

    #[test]
    fn test_category_display_order() {
        let names: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["Food", "Transport", "Entertainment", "Bills", "Shopping", "Other"]);
    }
}
