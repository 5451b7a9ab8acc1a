mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn init_logging() {
    let filter = EnvFilter::try_from_env("SPENDLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Signup {
            username,
            email,
            password,
        } => cli::session::signup(&username, &email, password),
        Commands::Signin { email, password } => cli::session::signin(&email, password),
        Commands::Signout => cli::session::signout(),
        Commands::Add {
            amount,
            category,
            date,
            description,
            email,
        } => cli::expenses::add(&amount, &category, date, description.as_deref(), email),
        Commands::List { email } => cli::expenses::list(email),
        Commands::Categories => cli::expenses::categories(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
