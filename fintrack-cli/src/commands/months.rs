//! Months command - list months with recorded data

use anyhow::Result;
use colored::Colorize;

use super::get_context;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let months = ctx.monthly.available_months().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&months)?);
        return Ok(());
    }
    if months.is_empty() {
        println!("No recorded months.");
        return Ok(());
    }

    println!("{}", "Recorded months".bold());
    for period in &months {
        println!("  {:04}-{:02}", period.year, period.month);
    }
    Ok(())
}
