//! User database operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::User;

/// Name/email used for the provisioned local user (CLI and --no-auth mode)
pub const LOCAL_USER_EMAIL: &str = "local@fintrack";

impl Database {
    /// Create a user and return its id
    ///
    /// Fails with `InvalidData` when the email is already registered.
    pub fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<i64> {
        let conn = self.conn()?;

        let result = conn.execute(
            "INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)",
            params![name, email, password_hash],
        );

        match result {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(Error::InvalidData(format!(
                    "Email already registered: {}",
                    email
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get a user by id
    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        let conn = self.conn()?;

        let result = conn.query_row(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE id = ?",
            params![id],
            row_to_user,
        );

        match result {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get a user by email
    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.conn()?;

        let result = conn.query_row(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = ?",
            params![email],
            row_to_user,
        );

        match result {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get or create the local user used by the CLI and unauthenticated mode
    pub fn ensure_local_user(&self) -> Result<User> {
        if let Some(user) = self.get_user_by_email(LOCAL_USER_EMAIL)? {
            return Ok(user);
        }

        let id = self.create_user("Local", LOCAL_USER_EMAIL, "")?;
        self.get_user(id)?
            .ok_or_else(|| Error::NotFound("Local user missing after insert".to_string()))
    }
}

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    let created_at: String = row.get(4)?;
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: parse_datetime(&created_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_fetch_user() {
        let db = Database::in_memory().unwrap();

        let id = db.create_user("Asha", "asha@example.com", "hash123").unwrap();
        assert!(id > 0);

        let user = db.get_user(id).unwrap().unwrap();
        assert_eq!(user.name, "Asha");
        assert_eq!(user.email, "asha@example.com");

        let by_email = db.get_user_by_email("asha@example.com").unwrap().unwrap();
        assert_eq!(by_email.id, id);

        assert!(db.get_user_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let db = Database::in_memory().unwrap();

        db.create_user("A", "dup@example.com", "h").unwrap();
        let err = db.create_user("B", "dup@example.com", "h").unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_ensure_local_user_is_idempotent() {
        let db = Database::in_memory().unwrap();

        let first = db.ensure_local_user().unwrap();
        let second = db.ensure_local_user().unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(first.email, LOCAL_USER_EMAIL);
    }
}
