//! Transaction commands

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use rust_decimal::Decimal;

use fintrack_core::{NewTransaction, TransactionKind, TransactionPatch};

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum TxCommands {
    /// List transactions
    List {
        /// Filter to a month 1-12
        #[arg(long)]
        month: Option<u32>,
        /// Filter to a year
        #[arg(long)]
        year: Option<i32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a new transaction
    Add {
        /// Amount, e.g. 12.50
        amount: Decimal,
        /// Category, e.g. groceries
        category: String,
        /// income or expense
        #[arg(long, default_value = "expense")]
        kind: String,
        /// Date YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Free-form note
        #[arg(long)]
        description: Option<String>,
    },

    /// Edit fields of a transaction
    Edit {
        /// Transaction id
        id: String,
        #[arg(long)]
        amount: Option<Decimal>,
        #[arg(long)]
        category: Option<String>,
        /// income or expense
        #[arg(long)]
        kind: Option<String>,
        /// Date YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a transaction
    Rm {
        /// Transaction id
        id: String,
    },
}

pub async fn run(cmd: TxCommands) -> Result<()> {
    let ctx = get_context()?;

    match cmd {
        TxCommands::List { month, year, json } => {
            let transactions = ctx.transactions.list(month, year).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&transactions)?);
                return Ok(());
            }
            if transactions.is_empty() {
                println!("No transactions.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Date", "Category", "Kind", "Amount", "Description", "Id"]);
            for tx in &transactions {
                table.add_row(vec![
                    tx.date.to_string(),
                    tx.category.clone(),
                    tx.kind.as_str().to_string(),
                    output::format_money(tx.amount),
                    tx.description.clone().unwrap_or_default(),
                    tx.id.clone(),
                ]);
            }
            println!("{table}");
        }

        TxCommands::Add {
            amount,
            category,
            kind,
            date,
            description,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let new_tx = NewTransaction {
                amount,
                category,
                kind: parse_kind(&kind)?,
                description,
                date,
                month: date.month(),
                year: date.year(),
            };
            let tx = ctx.transactions.create(&new_tx).await?;
            output::success(&format!("Recorded {} ({})", tx.category, tx.id));
        }

        TxCommands::Edit {
            id,
            amount,
            category,
            kind,
            date,
            description,
        } => {
            let patch = TransactionPatch {
                amount,
                category,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                description,
                date,
                month: date.map(|d| d.month()),
                year: date.map(|d| d.year()),
            };
            let tx = ctx.transactions.update(&id, &patch).await?;
            output::success(&format!("Updated {}", tx.id));
        }

        TxCommands::Rm { id } => {
            ctx.transactions.delete(&id).await?;
            output::success("Deleted.");
        }
    }
    Ok(())
}

fn parse_kind(kind: &str) -> Result<TransactionKind> {
    match kind.to_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => anyhow::bail!("Unknown kind: {}. Available: income, expense", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("income").unwrap(), TransactionKind::Income);
        assert_eq!(parse_kind("EXPENSE").unwrap(), TransactionKind::Expense);
        assert!(parse_kind("transfer").is_err());
    }
}
