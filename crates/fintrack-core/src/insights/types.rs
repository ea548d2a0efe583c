//! Core types and thresholds for the insight engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rent above this share of salary produces a warning
pub const RENT_WARNING_LIMIT_PCT: f64 = 40.0;
/// Rent above this share (but within the warning limit) produces a suggestion
pub const RENT_SUGGESTION_LIMIT_PCT: f64 = 30.0;
/// EMI above this share of salary produces a warning
pub const EMI_WARNING_LIMIT_PCT: f64 = 30.0;
/// EMI above this share (but within the warning limit) produces a suggestion
pub const EMI_SUGGESTION_LIMIT_PCT: f64 = 20.0;
/// Savings rate below this is critically low
pub const SAVINGS_CRITICAL_PCT: f64 = 10.0;
/// Savings rate below this earns a suggestion to save more
pub const SAVINGS_LOW_PCT: f64 = 20.0;
/// Savings rate at or above this is considered healthy
pub const SAVINGS_HEALTHY_PCT: f64 = 30.0;
/// Insurance premium below this share of salary is called out as affordable
pub const INSURANCE_MIN_PCT: f64 = 5.0;
/// Recommended ceiling for groceries as a share of salary
pub const GROCERIES_LIMIT_PCT: f64 = 15.0;
/// Recommended ceiling for utilities as a share of salary
pub const UTILITIES_LIMIT_PCT: f64 = 10.0;
/// Recommended ceiling for transport as a share of salary
pub const TRANSPORT_LIMIT_PCT: f64 = 10.0;
/// Recommended ceiling for entertainment as a share of salary
pub const ENTERTAINMENT_LIMIT_PCT: f64 = 5.0;

/// Severity of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Something is wrong and needs action
    Warning,
    /// A concrete change worth making
    Suggestion,
    /// General advice
    Tip,
    /// Positive reinforcement
    Success,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Warning => "warning",
            InsightKind::Suggestion => "suggestion",
            InsightKind::Tip => "tip",
            InsightKind::Success => "success",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warning" => Ok(InsightKind::Warning),
            "suggestion" => Ok(InsightKind::Suggestion),
            "tip" => Ok(InsightKind::Tip),
            "success" => Ok(InsightKind::Success),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// Which part of the entry an insight is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Rent,
    Emi,
    Savings,
    Insurance,
    Groceries,
    Utilities,
    Transport,
    Entertainment,
    /// The cross-cutting financial-health bonus
    Overall,
}

impl InsightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::Rent => "rent",
            InsightCategory::Emi => "emi",
            InsightCategory::Savings => "savings",
            InsightCategory::Insurance => "insurance",
            InsightCategory::Groceries => "groceries",
            InsightCategory::Utilities => "utilities",
            InsightCategory::Transport => "transport",
            InsightCategory::Entertainment => "entertainment",
            InsightCategory::Overall => "overall",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rent" => Ok(InsightCategory::Rent),
            "emi" => Ok(InsightCategory::Emi),
            "savings" => Ok(InsightCategory::Savings),
            "insurance" => Ok(InsightCategory::Insurance),
            "groceries" => Ok(InsightCategory::Groceries),
            "utilities" => Ok(InsightCategory::Utilities),
            "transport" => Ok(InsightCategory::Transport),
            "entertainment" => Ok(InsightCategory::Entertainment),
            "overall" => Ok(InsightCategory::Overall),
            _ => Err(format!("Unknown insight category: {}", s)),
        }
    }
}

/// A single advisory message produced by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Severity; serialized as `type` to match the API wire shape
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
    pub category: InsightCategory,
}

impl Insight {
    pub fn new(kind: InsightKind, message: impl Into<String>, category: InsightCategory) -> Self {
        Self {
            kind,
            message: message.into(),
            category,
        }
    }
}

/// The seven expense categories plus the resolved insurance contribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBreakdown {
    pub rent: f64,
    pub emi: f64,
    pub groceries: f64,
    pub utilities: f64,
    pub transport: f64,
    pub entertainment: f64,
    pub others: f64,
    pub insurance: f64,
}

/// Totals derived from an entry, as returned to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub salary: f64,
    pub total_expenses: f64,
    /// May be negative when expenses exceed salary
    pub savings: f64,
    /// Percentage of salary saved, formatted to 2 decimals
    pub savings_percentage: String,
    pub expense_breakdown: ResolvedBreakdown,
}
