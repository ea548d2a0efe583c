//! API access audit log

use rusqlite::params;
use serde::{Deserialize, Serialize};

use super::Database;
use crate::error::Result;

/// A single audit log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub user_email: String,
    pub action: String,
    pub resource: Option<String>,
    pub resource_id: Option<i64>,
    pub detail: Option<String>,
    pub created_at: String,
}

impl Database {
    /// Append an audit record
    pub fn log_audit(
        &self,
        user_email: &str,
        action: &str,
        resource: Option<&str>,
        resource_id: Option<i64>,
        detail: Option<&str>,
    ) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO audit_log (user_email, action, resource, resource_id, detail)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![user_email, action, resource, resource_id, detail],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List recent audit records, newest first
    pub fn list_audit_log(&self, limit: i64) -> Result<Vec<AuditEntry>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, user_email, action, resource, resource_id, detail, created_at
            FROM audit_log
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )?;

        let entries = stmt
            .query_map(params![limit], |row| {
                Ok(AuditEntry {
                    id: row.get(0)?,
                    user_email: row.get(1)?,
                    action: row.get(2)?,
                    resource: row.get(3)?,
                    resource_id: row.get(4)?,
                    detail: row.get(5)?,
                    created_at: row.get(6)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}
