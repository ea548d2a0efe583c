//! Fintrack Core Library
//!
//! Shared functionality for the Fintrack personal finance tracker:
//! - Database access and migrations
//! - Domain models for salary/expense entries
//! - The rule-based insight engine and financial summary computation

pub mod db;
pub mod error;
pub mod insights;
pub mod models;

pub use db::{AuditEntry, Database};
pub use error::{Error, Result};
pub use insights::{
    financial_summary, generate_insights, FinancialSummary, Insight, InsightCategory, InsightKind,
};
pub use models::{ExpenseBreakdown, ExpenseEntry, ExpenseStats, Insurance, NewExpenseEntry, User};
