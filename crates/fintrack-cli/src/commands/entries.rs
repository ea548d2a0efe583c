//! Entry commands: add, list, stats

use std::path::Path;

use anyhow::{bail, Result};
use fintrack_core::insights::{financial_summary, generate_insights, Insight, InsightKind};
use fintrack_core::models::{ExpenseBreakdown, Insurance};

use super::open_db;

fn kind_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Warning => "⚠️ ",
        InsightKind::Suggestion => "💡",
        InsightKind::Tip => "💭",
        InsightKind::Success => "✅",
    }
}

fn print_insights(insights: &[Insight]) {
    for insight in insights {
        println!("   {} [{}] {}", kind_icon(insight.kind), insight.category, insight.message);
    }
}

pub fn cmd_add(
    db_path: &Path,
    no_encrypt: bool,
    salary: f64,
    expenses: ExpenseBreakdown,
    insurance: Insurance,
    json: bool,
) -> Result<()> {
    // The engine's precondition: validate before computing
    if !salary.is_finite() || salary <= 0.0 {
        bail!("Salary must be a positive amount");
    }
    let fields = [
        expenses.rent,
        expenses.emi,
        expenses.groceries,
        expenses.utilities,
        expenses.transport,
        expenses.entertainment,
        expenses.others,
        insurance.amount,
    ];
    if fields.iter().any(|v| !v.is_finite() || *v < 0.0) {
        bail!("Expense amounts must be non-negative");
    }

    let db = open_db(db_path, no_encrypt)?;
    let user = db.ensure_local_user()?;

    let insights = generate_insights(salary, &expenses, &insurance);
    let summary = financial_summary(salary, &expenses, &insurance);

    let entry = db.insert_entry(user.id, salary, &expenses, &insurance, &insights)?;
    tracing::debug!(entry_id = entry.id, insights = insights.len(), "Entry recorded");

    if json {
        let out = serde_json::json!({
            "entry": entry,
            "summary": summary,
            "insights": insights,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("✅ Entry #{} recorded", entry.id);
    println!();
    println!("   Salary:         ₹{:.2}", summary.salary);
    println!("   Total expenses: ₹{:.2}", summary.total_expenses);
    println!(
        "   Savings:        ₹{:.2} ({}%)",
        summary.savings, summary.savings_percentage
    );
    println!();
    println!("Insights:");
    print_insights(&insights);

    Ok(())
}

pub fn cmd_list(db_path: &Path, no_encrypt: bool, json: bool) -> Result<()> {
    let db = open_db(db_path, no_encrypt)?;
    let user = db.ensure_local_user()?;

    let entries = db.list_entries(user.id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No entries yet. Submit one with: fintrack add --salary 50000");
        return Ok(());
    }

    println!("📒 {} entries (newest first)", entries.len());
    for entry in &entries {
        println!();
        println!(
            "#{} on {}  salary ₹{:.2}  expenses ₹{:.2}  savings ₹{:.2}",
            entry.id,
            entry.created_at.format("%Y-%m-%d"),
            entry.salary,
            entry.total_expenses,
            entry.savings,
        );
        print_insights(&entry.insights);
    }

    Ok(())
}

pub fn cmd_stats(db_path: &Path, no_encrypt: bool) -> Result<()> {
    let db = open_db(db_path, no_encrypt)?;
    let user = db.ensure_local_user()?;

    let stats = db.user_stats(user.id)?;

    if stats.total_entries == 0 {
        println!("No entries yet. Submit one with: fintrack add --salary 50000");
        return Ok(());
    }

    println!("📈 Statistics over {} entries", stats.total_entries);
    println!("   Average salary:       ₹{}", stats.average_salary);
    println!("   Average savings:      ₹{}", stats.average_savings);
    println!("   Average savings rate: {}%", stats.average_savings_percentage);

    Ok(())
}
