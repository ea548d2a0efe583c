//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database status

use std::path::Path;

use anyhow::{Context, Result};
use fintrack_core::db::Database;

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    tracing::debug!(path = %path_str, encrypted = !no_encrypt, "Opening database");
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path, no_encrypt)?;

    // Provision the local user the CLI submits entries as
    db.ensure_local_user()
        .context("Failed to provision local user")?;

    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else {
        println!("   🔒 Encryption: ENABLED");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Submit an entry: fintrack add --salary 50000 --rent 15000");
    println!("  2. Start the API:   fintrack serve");

    Ok(())
}

pub fn cmd_status(db_path: &Path, no_encrypt: bool) -> Result<()> {
    let db = open_db(db_path, no_encrypt)?;

    let user = db.ensure_local_user()?;
    let stats = db.user_stats(user.id)?;

    println!("📊 Fintrack status");
    println!("   Database: {}", db.path());
    println!(
        "   Encryption: {}",
        if db.is_encrypted()? { "enabled" } else { "disabled" }
    );
    println!("   Entries: {}", stats.total_entries);
    if stats.total_entries > 0 {
        println!("   Average salary: ₹{}", stats.average_salary);
        println!("   Average savings: ₹{}", stats.average_savings);
        println!(
            "   Average savings rate: {}%",
            stats.average_savings_percentage
        );
    }

    Ok(())
}
