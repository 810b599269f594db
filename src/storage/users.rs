//! Account storage and login verification

use super::{models::*, now_ts, schema::FederationDatabase};
use crate::error::{NhuError, Result};
use rusqlite::{params, Row};

impl FederationDatabase {
    /// Create a new account. Usernames are unique.
    pub fn create_user(&mut self, user: &NewUser) -> Result<i64> {
        if self.get_user_by_username(&user.username)?.is_some() {
            return Err(NhuError::UsernameTaken {
                username: user.username.clone(),
            });
        }

        self.conn.execute(
            "INSERT INTO users (username, password, full_name, email, phone, role, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                user.username,
                user.password,
                user.full_name,
                user.email,
                user.phone,
                user.role,
                now_ts()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get one account by username
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT user_id, username, password, full_name, email, phone, role, created_at
             FROM users WHERE username = ?",
        )?;

        let result = stmt.query_row(params![username], |row| self.row_to_user(row));

        match result {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Check a username/password pair.
    ///
    /// The same error comes back whether the username is unknown or the
    /// password is wrong.
    pub fn verify_login(&self, username: &str, password: &str) -> Result<User> {
        match self.get_user_by_username(username)? {
            Some(user) if user.password == password => Ok(user),
            _ => Err(NhuError::InvalidCredentials),
        }
    }

    /// Helper to convert a database row to a User
    pub(crate) fn row_to_user(&self, row: &Row) -> rusqlite::Result<User> {
        Ok(User {
            user_id: row.get(0)?,
            username: row.get(1)?,
            password: row.get(2)?,
            full_name: row.get(3)?,
            email: row.get(4)?,
            phone: row.get(5)?,
            role: row.get(6)?,
            created_at: row.get(7)?,
        })
    }
}
