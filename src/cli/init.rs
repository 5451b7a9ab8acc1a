use std::io::{self, BufRead, Write};

use spendlog::error::Result;
use spendlog::settings::{load_settings, save_settings, settings_file_exists, shellexpand_path};
use spendlog::Tracker;

/// Asks for a data directory, keeping `current` on an empty answer.
fn ask_data_dir(current: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    write!(out, "Data directory [{current}]: ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(match answer.trim() {
        "" => current.to_string(),
        chosen => shellexpand_path(chosen),
    })
}

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    settings.data_dir = match data_dir {
        Some(dir) => shellexpand_path(&dir),
        None if !settings_file_exists() => {
            ask_data_dir(&settings.data_dir, &mut io::stdin().lock(), &mut io::stdout())?
        }
        None => settings.data_dir,
    };

    save_settings(&settings)?;
    Tracker::open(&settings)?;

    println!("Initialized spendlog at {}", settings.data_dir);
    Ok(())
}
