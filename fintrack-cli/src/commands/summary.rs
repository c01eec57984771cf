//! Summary command - dashboard aggregate for one month

use anyhow::Result;
use chrono::Datelike;
use colored::Colorize;

use super::get_context;
use crate::output;

pub async fn run(month: Option<u32>, year: Option<i32>, json: bool) -> Result<()> {
    let ctx = get_context()?;

    let today = chrono::Local::now().date_naive();
    let month = month.unwrap_or_else(|| today.month());
    let year = year.unwrap_or_else(|| today.year());
    if !(1..=12).contains(&month) {
        anyhow::bail!("Month must be 1-12, got {}", month);
    }

    // The API takes the zero-based month used by the dashboard picker.
    let summary = ctx.monthly.summary(month - 1, year).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Summary for {:04}-{:02}", summary.year, summary.month).bold()
    );
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Income", &output::format_money(summary.total_income)]);
    table.add_row(vec!["Expenses", &output::format_money(summary.total_expense)]);
    table.add_row(vec!["Balance", &output::format_money(summary.balance)]);
    println!("{table}");
    Ok(())
}
