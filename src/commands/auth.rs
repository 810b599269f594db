//! Account commands: signup, login, logout, profile.

use crate::{
    core::session::{clear_session, load_session, save_session, Session},
    core::validate::{require_field, validate_email},
    error::NhuError,
    storage::NewUser,
    Result,
};

use super::common::CommandContext;

/// Fields collected by the signup form.
#[derive(Debug)]
pub struct SignupParams {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Handle the auth signup command
pub fn handle_signup(params: SignupParams) -> Result<()> {
    require_field("Username", &params.username)?;
    require_field("Password", &params.password)?;
    require_field("Full name", &params.full_name)?;
    if params.password != params.confirm_password {
        return Err(NhuError::PasswordMismatch);
    }
    validate_email(&params.email)?;

    let mut ctx = CommandContext::new()?;
    ctx.db.create_user(&NewUser {
        username: params.username.clone(),
        password: params.password,
        full_name: params.full_name,
        email: params.email,
        phone: params.phone,
        role: "Team Coach".to_string(),
    })?;

    println!(
        "✓ Account \"{}\" created, you can now log in",
        params.username
    );
    Ok(())
}

/// Handle the auth login command
pub fn handle_login(username: String, password: String) -> Result<()> {
    let ctx = CommandContext::new()?;
    let user = ctx.db.verify_login(&username, &password)?;

    save_session(&Session {
        username: user.username,
        full_name: user.full_name.clone(),
        role: user.role,
    })?;

    println!("✓ Welcome back, {}", user.full_name);
    Ok(())
}

/// Handle the auth logout command
pub fn handle_logout() -> Result<()> {
    clear_session()?;
    println!("✓ Logged out");
    Ok(())
}

/// Handle the profile command
pub fn handle_profile() -> Result<()> {
    let session = load_session().ok_or(NhuError::NotLoggedIn)?;

    println!("{}", session.full_name);
    println!("  Role:     {}", session.role);
    println!("  Username: {}", session.username);
    Ok(())
}
