//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::path::PathBuf;

use fintrack_core::models::{ExpenseBreakdown, Insurance};
use tempfile::TempDir;

use crate::commands;

fn setup_test_db() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fintrack.db");
    (dir, path)
}

fn sample_expenses() -> ExpenseBreakdown {
    ExpenseBreakdown {
        rent: 15000.0,
        emi: 5000.0,
        groceries: 6000.0,
        utilities: 3000.0,
        transport: 2000.0,
        entertainment: 1500.0,
        others: 1000.0,
    }
}

// ========== Init / Status ==========

#[test]
fn test_cmd_init_creates_database() {
    let (_dir, path) = setup_test_db();
    let result = commands::cmd_init(&path, true);
    assert!(result.is_ok());
    assert!(path.exists());
}

#[test]
fn test_cmd_status_on_fresh_database() {
    let (_dir, path) = setup_test_db();
    commands::cmd_init(&path, true).unwrap();
    let result = commands::cmd_status(&path, true);
    assert!(result.is_ok());
}

// ========== Add ==========

#[test]
fn test_cmd_add_records_entry() {
    let (_dir, path) = setup_test_db();
    commands::cmd_init(&path, true).unwrap();

    let result = commands::cmd_add(
        &path,
        true,
        50000.0,
        sample_expenses(),
        Insurance {
            has_insurance: true,
            amount: 3000.0,
        },
        false,
    );
    assert!(result.is_ok());

    // The entry should show up through the core API
    let db = commands::open_db(&path, true).unwrap();
    let user = db.ensure_local_user().unwrap();
    let entries = db.list_entries(user.id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].salary, 50000.0);
    assert!(!entries[0].insights.is_empty());
}

#[test]
fn test_cmd_add_json_output() {
    let (_dir, path) = setup_test_db();
    commands::cmd_init(&path, true).unwrap();

    let result = commands::cmd_add(
        &path,
        true,
        50000.0,
        sample_expenses(),
        Insurance::default(),
        true,
    );
    assert!(result.is_ok());
}

#[test]
fn test_cmd_add_rejects_zero_salary() {
    let (_dir, path) = setup_test_db();
    let result = commands::cmd_add(
        &path,
        true,
        0.0,
        sample_expenses(),
        Insurance::default(),
        false,
    );
    assert!(result.is_err());
    // Validation fails before the database is touched
    assert!(!path.exists());
}

#[test]
fn test_cmd_add_rejects_non_finite_salary() {
    let (_dir, path) = setup_test_db();
    for salary in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let result = commands::cmd_add(
            &path,
            true,
            salary,
            sample_expenses(),
            Insurance::default(),
            false,
        );
        assert!(result.is_err());
    }
}

#[test]
fn test_cmd_add_rejects_negative_expense() {
    let (_dir, path) = setup_test_db();
    let mut expenses = sample_expenses();
    expenses.groceries = -100.0;
    let result = commands::cmd_add(&path, true, 50000.0, expenses, Insurance::default(), false);
    assert!(result.is_err());
}

// ========== List / Stats ==========

#[test]
fn test_cmd_list_empty() {
    let (_dir, path) = setup_test_db();
    commands::cmd_init(&path, true).unwrap();
    let result = commands::cmd_list(&path, true, false);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_list_after_add() {
    let (_dir, path) = setup_test_db();
    commands::cmd_init(&path, true).unwrap();
    commands::cmd_add(
        &path,
        true,
        60000.0,
        sample_expenses(),
        Insurance {
            has_insurance: true,
            amount: 3500.0,
        },
        false,
    )
    .unwrap();

    assert!(commands::cmd_list(&path, true, false).is_ok());
    assert!(commands::cmd_list(&path, true, true).is_ok());
}

#[test]
fn test_cmd_stats_after_entries() {
    let (_dir, path) = setup_test_db();
    commands::cmd_init(&path, true).unwrap();
    commands::cmd_add(
        &path,
        true,
        40000.0,
        sample_expenses(),
        Insurance::default(),
        false,
    )
    .unwrap();
    commands::cmd_add(
        &path,
        true,
        80000.0,
        sample_expenses(),
        Insurance::default(),
        false,
    )
    .unwrap();

    let db = commands::open_db(&path, true).unwrap();
    let user = db.ensure_local_user().unwrap();
    let stats = db.user_stats(user.id).unwrap();
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.average_salary, "60000.00");

    assert!(commands::cmd_stats(&path, true).is_ok());
}
