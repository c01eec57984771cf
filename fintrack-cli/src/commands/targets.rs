//! Savings target commands

use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::Subcommand;
use rust_decimal::Decimal;

use fintrack_core::{NewTarget, TargetPatch};

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum TargetCommands {
    /// List savings targets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a target for a category and month
    Add {
        /// Amount, e.g. 500
        amount: Decimal,
        /// Category, e.g. groceries
        category: String,
        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Edit fields of a target
    Edit {
        /// Target id
        id: String,
        #[arg(long)]
        amount: Option<Decimal>,
        #[arg(long)]
        category: Option<String>,
        /// Month 1-12
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },

    /// Delete a target
    Rm {
        /// Target id
        id: String,
    },
}

pub async fn run(cmd: TargetCommands) -> Result<()> {
    let ctx = get_context()?;

    match cmd {
        TargetCommands::List { json } => {
            let targets = ctx.targets.list().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&targets)?);
                return Ok(());
            }
            if targets.is_empty() {
                println!("No targets.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Period", "Category", "Amount", "Id"]);
            for target in &targets {
                table.add_row(vec![
                    format!("{:04}-{:02}", target.year, target.month),
                    target.category.clone(),
                    output::format_money(target.amount),
                    target.id.clone(),
                ]);
            }
            println!("{table}");
        }

        TargetCommands::Add {
            amount,
            category,
            month,
            year,
        } => {
            let today = chrono::Local::now().date_naive();
            let new_target = NewTarget {
                amount,
                category,
                month: month.unwrap_or_else(|| today.month()),
                year: year.unwrap_or_else(|| today.year()),
                created_at: Utc::now(),
            };
            let target = ctx.targets.create(&new_target).await?;
            output::success(&format!("Target set for {} ({})", target.category, target.id));
        }

        TargetCommands::Edit {
            id,
            amount,
            category,
            month,
            year,
        } => {
            let patch = TargetPatch {
                amount,
                category,
                month,
                year,
            };
            let target = ctx.targets.update(&id, &patch).await?;
            output::success(&format!("Updated {}", target.id));
        }

        TargetCommands::Rm { id } => {
            ctx.targets.delete(&id).await?;
            output::success("Deleted.");
        }
    }
    Ok(())
}
