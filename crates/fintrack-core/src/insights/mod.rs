//! Rule-based insight generation over a monthly salary/expense entry
//!
//! The engine is a fixed, ordered table of percentage thresholds on salary.
//! It is pure and synchronous: no I/O, no state, safe to call from any
//! number of threads.

mod engine;
mod types;

pub use engine::{financial_summary, generate_insights, total_expenses};
pub use types::{
    FinancialSummary, Insight, InsightCategory, InsightKind, ResolvedBreakdown,
    EMI_SUGGESTION_LIMIT_PCT, EMI_WARNING_LIMIT_PCT, ENTERTAINMENT_LIMIT_PCT, GROCERIES_LIMIT_PCT,
    INSURANCE_MIN_PCT, RENT_SUGGESTION_LIMIT_PCT, RENT_WARNING_LIMIT_PCT, SAVINGS_CRITICAL_PCT,
    SAVINGS_HEALTHY_PCT, SAVINGS_LOW_PCT, TRANSPORT_LIMIT_PCT, UTILITIES_LIMIT_PCT,
};
