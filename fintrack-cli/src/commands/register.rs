//! Register command - create an account, plus avatar upload

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Password;

use super::get_context;

pub async fn run(username: &str, email: &str, avatar: &Path) -> Result<()> {
    if !avatar.exists() {
        anyhow::bail!("Avatar file not found: {:?}", avatar);
    }

    let ctx = get_context()?;
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let user = ctx.auth.register(username, email, &password, avatar).await?;
    println!(
        "{} Account created for {}",
        "Success!".green(),
        user.username.bold()
    );
    Ok(())
}

pub async fn upload_avatar(file: &Path) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File not found: {:?}", file);
    }

    let ctx = get_context()?;
    let user = ctx.auth.upload_avatar(file).await?;
    match &user.avatar {
        Some(avatar) => println!("{} Avatar updated: {}", "Success!".green(), avatar),
        None => println!("{} Avatar updated", "Success!".green()),
    }
    Ok(())
}
