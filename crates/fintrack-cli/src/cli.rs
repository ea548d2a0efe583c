//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default database location: the platform data directory, falling back
/// to the current directory
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("fintrack").join("fintrack.db"))
        .unwrap_or_else(|| PathBuf::from("fintrack.db"))
}

/// Fintrack - Track salary, expenses, and savings health
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "Self-hosted personal finance tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value_os_t = default_db_path(), global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set FINTRACK_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Submit a monthly salary/expense entry
    Add {
        /// Monthly salary (must be positive)
        #[arg(short, long)]
        salary: f64,

        /// Monthly rent
        #[arg(long, default_value = "0")]
        rent: f64,

        /// Monthly loan EMI payments
        #[arg(long, default_value = "0")]
        emi: f64,

        /// Monthly groceries spend
        #[arg(long, default_value = "0")]
        groceries: f64,

        /// Monthly utilities spend
        #[arg(long, default_value = "0")]
        utilities: f64,

        /// Monthly transport spend
        #[arg(long, default_value = "0")]
        transport: f64,

        /// Monthly entertainment spend
        #[arg(long, default_value = "0")]
        entertainment: f64,

        /// Other monthly expenses
        #[arg(long, default_value = "0")]
        others: f64,

        /// Monthly insurance premium (implies coverage)
        #[arg(long)]
        insurance: Option<f64>,

        /// Print the result as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List recent entries
    List {
        /// Print entries as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show aggregate statistics across entries
    Stats,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a
        /// network. By default, the server requires a bearer token issued
        /// by the register/login endpoints.
        #[arg(long)]
        no_auth: bool,
    },

    /// Show database status
    Status,
}
