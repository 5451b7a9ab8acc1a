pub mod expenses;
pub mod init;
pub mod session;
pub mod status;

use clap::{Parser, Subcommand};

use spendlog::error::{Result, TrackerError};
use spendlog::settings::Settings;

/// Email to act as: an explicit `--email` wins over the signed-in session.
pub(crate) fn resolve_email(settings: &Settings, email: Option<String>) -> Result<String> {
    email
        .or_else(|| settings.session_email.clone())
        .ok_or(TrackerError::NotSignedIn)
}

/// Uses the given password or prompts for one without echo.
pub(crate) fn read_password(provided: Option<String>) -> Result<String> {
    match provided {
        Some(p) => Ok(p),
        None => Ok(rpassword::prompt_password("Password: ")?),
    }
}

#[derive(Parser)]
#[command(name = "spendlog", about = "Track personal expenses.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and initialize the database.
    Init {
        /// Path for spendlog data (default: ~/Documents/spendlog)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Create an account.
    Signup {
        /// Display name
        username: String,
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign in and remember the account for later commands.
    Signin {
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the signed-in account.
    Signout,
    /// Record an expense.
    Add {
        /// Amount, e.g. 12.50
        amount: String,
        /// Food, Transport, Entertainment, Bills, Shopping or Other
        #[arg(long, default_value = "Other")]
        category: String,
        /// Date as MM/DD/YYYY (default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Account email (default: signed-in account)
        #[arg(long)]
        email: Option<String>,
    },
    /// Show the running total and all expenses.
    List {
        /// Account email (default: signed-in account)
        #[arg(long)]
        email: Option<String>,
    },
    /// List the expense categories.
    Categories,
    /// Show current database and summary statistics.
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_email_wins() {
        let settings = Settings { session_email: Some("s@x.com".to_string()), ..Settings::default() };
        assert_eq!(resolve_email(&settings, Some("e@x.com".to_string())).unwrap(), "e@x.com");
        assert_eq!(resolve_email(&settings, None).unwrap(), "s@x.com");
    }

    #[test]
    fn test_no_session_is_an_error() {
        let err = resolve_email(&Settings::default(), None).unwrap_err();
        assert!(matches!(err, TrackerError::NotSignedIn));
    }

    #[test]
    fn test_cli_parses_add() {
        let cli = Cli::try_parse_from(["spendlog", "add", "4.20", "--category", "food", "--date", "01/02/2024"]).unwrap();
        match cli.command {
            Commands::Add { amount, category, date, description, email } => {
                assert_eq!(amount, "4.20");
                assert_eq!(category, "food");
                assert_eq!(date.as_deref(), Some("01/02/2024"));
                assert!(description.is_none());
                assert!(email.is_none());
            }
            _ => panic!("expected add"),
        }
    }
}
