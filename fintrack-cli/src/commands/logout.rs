//! Logout command - drop the cached session

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run() -> Result<()> {
    let ctx = get_context()?;
    ctx.auth.logout()?;
    output::success("Logged out.");
    Ok(())
}
