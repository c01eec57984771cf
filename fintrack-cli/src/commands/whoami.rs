//! Whoami command - show the logged-in user

use anyhow::Result;
use colored::Colorize;

use super::get_context;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    match ctx.auth.current_user().await {
        Some(user) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&user)?);
                return Ok(());
            }
            println!("{}", user.username.bold());
            println!("  email: {}", user.email);
            if let Some(avatar) = &user.avatar {
                println!("  avatar: {}", avatar);
            }
        }
        None => println!("Not logged in."),
    }
    Ok(())
}
