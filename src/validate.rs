//! Input checks applied before anything reaches the store.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::models::Category;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    Amount,
    Category,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Date => "date",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

fn invalid(field: Field, message: &'static str) -> ValidationError {
    ValidationError { field, message }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Signup {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Signin {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub category: Category,
    pub date: String,
    pub description: Option<String>,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
        )
        .expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(invalid(Field::Email, "Email is required"));
    }
    if !is_valid_email(email) {
        return Err(invalid(Field::Email, "Enter a valid email address"));
    }
    Ok(())
}

pub fn validate_signup(username: &str, email: &str, password: &str) -> Result<Signup, ValidationError> {
    let (username, email, password) = (username.trim(), email.trim(), password.trim());
    if username.is_empty() {
        return Err(invalid(Field::Username, "Username is required"));
    }
    check_email(email)?;
    if password.is_empty() {
        return Err(invalid(Field::Password, "Password is required"));
    }
    // Length in UTF-16 code units, as the mobile client measured it.
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(invalid(Field::Password, "Password must be at least 6 characters"));
    }
    Ok(Signup {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_signin(email: &str, password: &str) -> Result<Signin, ValidationError> {
    let (email, password) = (email.trim(), password.trim());
    check_email(email)?;
    if password.is_empty() {
        return Err(invalid(Field::Password, "Password is required"));
    }
    Ok(Signin {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(invalid(Field::Amount, "Amount is required"));
    }
    let amount: f64 = raw
        .parse()
        .ok()
        .filter(|a: &f64| a.is_finite())
        .ok_or_else(|| invalid(Field::Amount, "Invalid amount format"))?;
    if amount <= 0.0 {
        return Err(invalid(Field::Amount, "Amount must be greater than 0"));
    }
    Ok(amount)
}

pub fn validate_expense(
    amount: &str,
    category: &str,
    date: &str,
    description: Option<&str>,
) -> Result<NewExpense, ValidationError> {
    let amount = parse_amount(amount)?;
    let category: Category = category
        .parse()
        .map_err(|_| invalid(Field::Category, "Choose one of the listed categories"))?;
    let date = date.trim();
    if date.is_empty() {
        return Err(invalid(Field::Date, "Date is required"));
    }
    let description = description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);
    Ok(NewExpense {
        amount,
        category,
        date: date.to_string(),
        description,
    })
}
