//! Login command - authenticate and cache the session

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};

use super::get_context;

pub async fn run(email: Option<String>) -> Result<()> {
    let ctx = get_context()?;

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let user = ctx.auth.login(&email, &password).await?;
    println!("{} Logged in as {}", "Success!".green(), user.username.bold());
    Ok(())
}
