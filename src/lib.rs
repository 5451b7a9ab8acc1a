pub mod accounts;
pub mod db;
pub mod error;
pub mod expenses;
pub mod fmt;
pub mod models;
pub mod password;
pub mod settings;
pub mod tracker;
pub mod validate;

pub use error::{Result, TrackerError};
pub use models::{Account, Category, Expense};
pub use tracker::Tracker;
