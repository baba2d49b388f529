use crate::Database;
use crate::error::{StoreError, StoreResult, is_unique_violation};
use crate::models::UserRow;
use rusqlite::{Connection, OptionalExtension};

impl Database {
    /// Insert a user and return the id SQLite assigned. A duplicate name
    /// fails with `NameTaken`.
    pub fn create_user(&self, name: &str, credential: &str) -> StoreResult<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (name, credential) VALUES (?1, ?2)",
                (name, credential),
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::NameTaken
                } else {
                    e.into()
                }
            })?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn user_by_name(&self, name: &str) -> StoreResult<UserRow> {
        self.with_conn(|conn| {
            query_user_by_name(conn, name)?.ok_or(StoreError::UserNotFound)
        })
    }

    pub fn user_by_id(&self, id: i64) -> StoreResult<UserRow> {
        self.with_conn(|conn| query_user_by_id(conn, id)?.ok_or(StoreError::UserNotFound))
    }

    pub fn user_name_exists(&self, name: &str) -> StoreResult<bool> {
        self.with_conn(|conn| Ok(query_user_by_name(conn, name)?.is_some()))
    }
}

fn query_user_by_name(conn: &Connection, name: &str) -> StoreResult<Option<UserRow>> {
    let mut stmt = conn.prepare("SELECT id, name, credential FROM users WHERE name = ?1")?;

    let row = stmt
        .query_row([name], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                name: row.get(1)?,
                credential: row.get(2)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_user_by_id(conn: &Connection, id: i64) -> StoreResult<Option<UserRow>> {
    let mut stmt = conn.prepare("SELECT id, name, credential FROM users WHERE id = ?1")?;

    let row = stmt
        .query_row([id], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                name: row.get(1)?,
                credential: row.get(2)?,
            })
        })
        .optional()?;

    Ok(row)
}
