//! Fintrack CLI - Personal finance tracker
//!
//! Usage:
//!   fintrack init                 Initialize database
//!   fintrack add --salary 50000 --rent 15000 ...   Submit a monthly entry
//!   fintrack list                 Show recent entries
//!   fintrack stats                Aggregate statistics
//!   fintrack serve --port 3000    Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use fintrack_core::models::{ExpenseBreakdown, Insurance};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Add {
            salary,
            rent,
            emi,
            groceries,
            utilities,
            transport,
            entertainment,
            others,
            insurance,
            json,
        } => {
            let expenses = ExpenseBreakdown {
                rent,
                emi,
                groceries,
                utilities,
                transport,
                entertainment,
                others,
            };
            let insurance = match insurance {
                Some(amount) => Insurance {
                    has_insurance: true,
                    amount,
                },
                None => Insurance::default(),
            };
            commands::cmd_add(&cli.db, cli.no_encrypt, salary, expenses, insurance, json)
        }
        Commands::List { json } => commands::cmd_list(&cli.db, cli.no_encrypt, json),
        Commands::Stats => commands::cmd_stats(&cli.db, cli.no_encrypt),
        Commands::Serve {
            port,
            host,
            no_auth,
        } => commands::cmd_serve(&cli.db, &host, port, no_auth, cli.no_encrypt).await,
        Commands::Status => commands::cmd_status(&cli.db, cli.no_encrypt),
    }
}
