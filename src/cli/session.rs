use zeroize::Zeroize;

use spendlog::error::{Result, TrackerError};
use spendlog::fmt::greeting;
use spendlog::settings::{load_settings, save_settings};
use spendlog::validate::{validate_signin, validate_signup};
use spendlog::Tracker;

use super::read_password;

pub fn signup(username: &str, email: &str, password: Option<String>) -> Result<()> {
    let mut password = read_password(password)?;
    let checked = validate_signup(username, email, &password);
    password.zeroize();
    let mut input = checked?;

    let tracker = Tracker::open(&load_settings())?;
    let result = tracker.create_account(&input.username, &input.email, &input.password);
    input.password.zeroize();
    match result {
        Err(TrackerError::DuplicateEmail(_)) => return Err(TrackerError::SignupFailed),
        other => other?,
    }

    println!("Signup successful! Please sign in.");
    Ok(())
}

pub fn signin(email: &str, password: Option<String>) -> Result<()> {
    let mut password = read_password(password)?;
    let checked = validate_signin(email, &password);
    password.zeroize();
    let mut input = checked?;

    let mut settings = load_settings();
    let tracker = Tracker::open(&settings)?;
    let ok = tracker.authenticate(&input.email, &input.password);
    input.password.zeroize();
    if !ok {
        return Err(TrackerError::InvalidCredentials);
    }

    let username = tracker.username_for_email(&input.email);
    settings.session_email = Some(input.email);
    save_settings(&settings)?;

    println!("{}", greeting(&username));
    Ok(())
}

pub fn signout() -> Result<()> {
    let mut settings = load_settings();
    if settings.session_email.take().is_some() {
        save_settings(&settings)?;
        println!("Signed out.");
    } else {
        println!("Not signed in.");
    }
    Ok(())
}
