//! Expense entry handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;

use crate::{AppError, AppState, AuthUser, SuccessResponse};
use fintrack_core::insights::{financial_summary, generate_insights, FinancialSummary, Insight};
use fintrack_core::models::{ExpenseEntry, ExpenseStats, NewExpenseEntry};

/// Response for entry creation: the persisted entry plus the derived
/// summary and insights
#[derive(Debug, Serialize)]
pub struct CreateExpenseResponse {
    pub entry: ExpenseEntry,
    pub summary: FinancialSummary,
    pub insights: Vec<Insight>,
}

/// POST /api/expenses - Submit a monthly entry
///
/// Validates the engine's precondition (salary > 0, expenses present)
/// before computing, then persists the entry with its insights.
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<NewExpenseEntry>,
) -> Result<(StatusCode, Json<CreateExpenseResponse>), AppError> {
    if !body.salary.is_finite() || body.salary <= 0.0 {
        return Err(AppError::bad_request("Please provide a valid salary amount"));
    }
    let Some(expenses) = body.expenses else {
        return Err(AppError::bad_request("Please provide expense details"));
    };

    let fields = [
        expenses.rent,
        expenses.emi,
        expenses.groceries,
        expenses.utilities,
        expenses.transport,
        expenses.entertainment,
        expenses.others,
        body.insurance.amount,
    ];
    if fields.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(AppError::bad_request("Expense amounts must be non-negative"));
    }

    let insights = generate_insights(body.salary, &expenses, &body.insurance);
    let summary = financial_summary(body.salary, &expenses, &body.insurance);

    let entry = state
        .db
        .insert_entry(user.id, body.salary, &expenses, &body.insurance, &insights)?;

    state.db.log_audit(
        &user.email,
        "create",
        Some("expense"),
        Some(entry.id),
        Some(&format!("insights={}", insights.len())),
    )?;

    Ok((
        StatusCode::CREATED,
        Json(CreateExpenseResponse {
            entry,
            summary,
            insights,
        }),
    ))
}

/// GET /api/expenses - List the caller's entries, newest first (max 50)
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<ExpenseEntry>>, AppError> {
    let entries = state.db.list_entries(user.id)?;

    state.db.log_audit(
        &user.email,
        "list",
        Some("expense"),
        None,
        Some(&format!("count={}", entries.len())),
    )?;

    Ok(Json(entries))
}

/// GET /api/expenses/stats - Aggregate statistics over the caller's entries
pub async fn get_expense_stats(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ExpenseStats>, AppError> {
    let stats = state.db.user_stats(user.id)?;

    state
        .db
        .log_audit(&user.email, "stats", Some("expense"), None, None)?;

    Ok(Json(stats))
}

/// Fetch an entry and enforce that it belongs to the caller
fn owned_entry(state: &AppState, user: &AuthUser, id: i64) -> Result<ExpenseEntry, AppError> {
    let entry = state
        .db
        .get_entry(id)?
        .ok_or_else(|| AppError::not_found("Expense not found"))?;

    if entry.user_id != user.id {
        return Err(AppError::forbidden("Not authorized to access this expense"));
    }

    Ok(entry)
}

/// GET /api/expenses/:id - Get a single entry
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ExpenseEntry>, AppError> {
    let entry = owned_entry(&state, &user, id)?;

    state
        .db
        .log_audit(&user.email, "view", Some("expense"), Some(id), None)?;

    Ok(Json(entry))
}

/// DELETE /api/expenses/:id - Delete an entry
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    owned_entry(&state, &user, id)?;

    state.db.delete_entry(id)?;

    state
        .db
        .log_audit(&user.email, "delete", Some("expense"), Some(id), None)?;

    Ok(Json(SuccessResponse { success: true }))
}
