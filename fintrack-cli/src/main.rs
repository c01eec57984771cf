//! Fintrack CLI - personal finance dashboard in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{login, logout, months, register, summary, targets, transactions, whoami};

/// Fintrack - personal finance dashboard in your terminal
#[derive(Parser)]
#[command(name = "ft", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account on the backend
    Register {
        /// Username for the new account
        username: String,
        /// Email address
        email: String,
        /// Profile picture to upload
        #[arg(long)]
        avatar: PathBuf,
    },

    /// Log in and cache the session
    Login {
        /// Email address (prompted when omitted)
        email: Option<String>,
    },

    /// Drop the cached session
    Logout,

    /// Show the logged-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload a new profile picture
    Avatar {
        /// Image file to upload
        file: PathBuf,
    },

    /// Manage transactions
    #[command(subcommand)]
    Tx(transactions::TxCommands),

    /// Manage savings targets
    #[command(subcommand)]
    Target(targets::TargetCommands),

    /// Show the dashboard summary for a month
    Summary {
        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List months with recorded data
    Months {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Register {
            username,
            email,
            avatar,
        } => register::run(&username, &email, &avatar).await,
        Commands::Login { email } => login::run(email).await,
        Commands::Logout => logout::run(),
        Commands::Whoami { json } => whoami::run(json).await,
        Commands::Avatar { file } => register::upload_avatar(&file).await,
        Commands::Tx(cmd) => transactions::run(cmd).await,
        Commands::Target(cmd) => targets::run(cmd).await,
        Commands::Summary { month, year, json } => summary::run(month, year, json).await,
        Commands::Months { json } => months::run(json).await,
    }
}
