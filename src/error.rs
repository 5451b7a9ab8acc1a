use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("An account with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Signup failed. Email may already exist.")]
    SignupFailed,

    #[error("Database schema version {found} is newer than this build supports ({supported})")]
    SchemaTooNew { found: i64, supported: i64 },

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not signed in. Run `spendlog signin <email>` or pass --email.")]
    NotSignedIn,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
