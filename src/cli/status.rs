use spendlog::accounts::count_accounts;
use spendlog::error::Result;
use spendlog::expenses::count_expenses;
use spendlog::settings::load_settings;
use spendlog::Tracker;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let db_path = settings.db_path();

    println!("Data dir:   {}", settings.data_dir);
    println!("Database:   {}", db_path.display());
    println!("Signed in:  {}", settings.session_email.as_deref().unwrap_or("(nobody)"));

    if db_path.exists() {
        let tracker = Tracker::open(&settings)?;
        let conn = tracker.connection();
        println!();
        println!("Accounts:   {}", count_accounts(conn)?);
        println!("Expenses:   {}", count_expenses(conn)?);
    } else {
        println!();
        println!("Database not found. Run `spendlog init` to set up.");
    }

    Ok(())
}
