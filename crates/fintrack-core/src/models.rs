//! Domain models for Fintrack

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::insights::Insight;

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2id hash, never serialized to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The seven user-entered monthly expense categories
///
/// Fields absent from the request body default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseBreakdown {
    pub rent: f64,
    pub emi: f64,
    pub groceries: f64,
    pub utilities: f64,
    pub transport: f64,
    pub entertainment: f64,
    pub others: f64,
}

impl ExpenseBreakdown {
    /// Sum of the seven categories (excluding insurance)
    pub fn total(&self) -> f64 {
        self.rent
            + self.emi
            + self.groceries
            + self.utilities
            + self.transport
            + self.entertainment
            + self.others
    }
}

/// Insurance coverage for an entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Insurance {
    pub has_insurance: bool,
    pub amount: f64,
}

impl Insurance {
    /// The amount counted towards total expenses (0 when uncovered)
    pub fn contribution(&self) -> f64 {
        if self.has_insurance {
            self.amount
        } else {
            0.0
        }
    }
}

/// Request body for submitting a monthly entry
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpenseEntry {
    pub salary: f64,
    /// Required; callers reject requests without it
    pub expenses: Option<ExpenseBreakdown>,
    #[serde(default)]
    pub insurance: Insurance,
}

/// A persisted monthly entry with computed totals and generated insights
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    pub id: i64,
    pub user_id: i64,
    pub salary: f64,
    pub expenses: ExpenseBreakdown,
    pub insurance: Insurance,
    pub total_expenses: f64,
    pub savings: f64,
    pub insights: Vec<Insight>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate statistics over a user's entries
///
/// Averages are 2-decimal strings on the wire, `"0.00"` when the user has
/// no entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseStats {
    pub total_entries: i64,
    pub average_salary: String,
    pub average_savings: String,
    pub average_savings_percentage: String,
}

impl ExpenseStats {
    /// Stats for a user with no entries
    pub fn empty() -> Self {
        Self {
            total_entries: 0,
            average_salary: "0.00".to_string(),
            average_savings: "0.00".to_string(),
            average_savings_percentage: "0.00".to_string(),
        }
    }
}
