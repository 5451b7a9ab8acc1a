/// Dollar amount rounded to cents with comma-grouped thousands: $1,234.56
pub fn money(val: f64) -> String {
    let cents = (val.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(d);
    }

    let sign = if val < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

pub fn greeting(username: &str) -> String {
    let name = if username.is_empty() { "User" } else { username };
    format!("Welcome, {name}!")
}

/// Today's local date as MM/DD/YYYY.
pub fn today_mdy() -> String {
    chrono::Local::now().format("%m/%d/%Y").to_string()
}
