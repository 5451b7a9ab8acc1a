use comfy_table::{Cell, CellAlignment, Table};

use spendlog::error::Result;
use spendlog::fmt::{greeting, money, today_mdy};
use spendlog::models::Category;
use spendlog::settings::load_settings;
use spendlog::validate::validate_expense;
use spendlog::Tracker;

use super::resolve_email;

pub fn add(
    amount: &str,
    category: &str,
    date: Option<String>,
    description: Option<&str>,
    email: Option<String>,
) -> Result<()> {
    let settings = load_settings();
    let email = resolve_email(&settings, email)?;
    let date = date.unwrap_or_else(today_mdy);
    let expense = validate_expense(amount, category, &date, description)?;

    let tracker = Tracker::open(&settings)?;
    tracker.create_expense(
        &email,
        expense.amount,
        expense.category,
        &expense.date,
        expense.description.as_deref(),
    )?;
    println!("Expense saved successfully!");
    Ok(())
}

pub fn list(email: Option<String>) -> Result<()> {
    let settings = load_settings();
    let email = resolve_email(&settings, email)?;
    let tracker = Tracker::open(&settings)?;

    println!("{}", greeting(&tracker.username_for_email(&email)));
    println!("Total expenses: {}", money(tracker.total_for_user(&email)));

    let rows = tracker.expenses_for_user(&email);
    if rows.is_empty() {
        println!("No expenses yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Category", "Amount", "Description"]);
    for e in rows {
        table.add_row(vec![
            Cell::new(e.date),
            Cell::new(e.category),
            Cell::new(money(e.amount)).set_alignment(CellAlignment::Right),
            Cell::new(e.description.unwrap_or_default()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn categories() -> Result<()> {
    for c in Category::ALL {
        println!("{c}");
    }
    Ok(())
}
