//! Expense entry database operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::insights::{total_expenses, Insight};
use crate::models::{ExpenseBreakdown, ExpenseEntry, ExpenseStats, Insurance};

/// History responses are capped at the most recent 50 entries
pub const LIST_LIMIT: i64 = 50;

impl Database {
    /// Persist an entry with its computed totals and generated insights
    pub fn insert_entry(
        &self,
        user_id: i64,
        salary: f64,
        expenses: &ExpenseBreakdown,
        insurance: &Insurance,
        insights: &[Insight],
    ) -> Result<ExpenseEntry> {
        let conn = self.conn()?;

        let total = total_expenses(expenses, insurance);
        let savings = salary - total;
        let insights_json = serde_json::to_string(insights)?;

        conn.execute(
            r#"
            INSERT INTO expense_entries (
                user_id, salary, rent, emi, groceries, utilities, transport,
                entertainment, others, has_insurance, insurance_amount,
                total_expenses, savings, insights
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                user_id,
                salary,
                expenses.rent,
                expenses.emi,
                expenses.groceries,
                expenses.utilities,
                expenses.transport,
                expenses.entertainment,
                expenses.others,
                insurance.has_insurance,
                insurance.amount,
                total,
                savings,
                insights_json
            ],
        )?;

        let id = conn.last_insert_rowid();
        let entry = conn.query_row(
            &format!("{} WHERE id = ?", SELECT_ENTRY),
            params![id],
            row_to_entry,
        )?;

        Ok(entry)
    }

    /// List a user's entries, newest first, capped at [`LIST_LIMIT`]
    pub fn list_entries(&self, user_id: i64) -> Result<Vec<ExpenseEntry>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!(
            "{} WHERE user_id = ? ORDER BY created_at DESC, id DESC LIMIT ?",
            SELECT_ENTRY
        ))?;
        let rows = stmt.query_map(params![user_id, LIST_LIMIT], row_to_entry)?;

        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Get a single entry by id
    pub fn get_entry(&self, id: i64) -> Result<Option<ExpenseEntry>> {
        let conn = self.conn()?;

        let result = conn.query_row(
            &format!("{} WHERE id = ?", SELECT_ENTRY),
            params![id],
            row_to_entry,
        );

        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete an entry; returns whether a row was removed
    pub fn delete_entry(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM expense_entries WHERE id = ?", params![id])?;
        Ok(deleted > 0)
    }

    /// Aggregate statistics over a user's entries
    ///
    /// Averages as 2-decimal strings; zeros when the user has no entries.
    pub fn user_stats(&self, user_id: i64) -> Result<ExpenseStats> {
        let conn = self.conn()?;

        let (count, avg_salary, avg_savings): (i64, Option<f64>, Option<f64>) = conn.query_row(
            "SELECT COUNT(*), AVG(salary), AVG(savings) FROM expense_entries WHERE user_id = ?",
            params![user_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;

        if count == 0 {
            return Ok(ExpenseStats::empty());
        }

        let avg_salary = avg_salary.unwrap_or(0.0);
        let avg_savings = avg_savings.unwrap_or(0.0);
        let avg_savings_pct = (avg_savings / avg_salary) * 100.0;

        Ok(ExpenseStats {
            total_entries: count,
            average_salary: format!("{:.2}", avg_salary),
            average_savings: format!("{:.2}", avg_savings),
            average_savings_percentage: format!("{:.2}", avg_savings_pct),
        })
    }
}

const SELECT_ENTRY: &str = r#"
    SELECT id, user_id, salary, rent, emi, groceries, utilities, transport,
           entertainment, others, has_insurance, insurance_amount,
           total_expenses, savings, insights, created_at
    FROM expense_entries
"#;

fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<ExpenseEntry> {
    let insights_json: String = row.get(14)?;
    let created_at: String = row.get(15)?;

    Ok(ExpenseEntry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        salary: row.get(2)?,
        expenses: ExpenseBreakdown {
            rent: row.get(3)?,
            emi: row.get(4)?,
            groceries: row.get(5)?,
            utilities: row.get(6)?,
            transport: row.get(7)?,
            entertainment: row.get(8)?,
            others: row.get(9)?,
        },
        insurance: Insurance {
            has_insurance: row.get(10)?,
            amount: row.get(11)?,
        },
        total_expenses: row.get(12)?,
        savings: row.get(13)?,
        insights: serde_json::from_str(&insights_json).unwrap_or_default(),
        created_at: parse_datetime(&created_at),
    })
}
