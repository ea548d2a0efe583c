//! Audit log handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use fintrack_core::AuditEntry;

/// Query parameters for the audit log
#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// GET /api/audit - List recent audit records
pub async fn list_audit_log(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AuditQuery>,
) -> Result<Json<Vec<AuditEntry>>, AppError> {
    if params.limit < 1 || params.limit > 1000 {
        return Err(AppError::bad_request("Limit must be between 1 and 1000"));
    }

    let entries = state.db.list_audit_log(params.limit)?;
    Ok(Json(entries))
}
