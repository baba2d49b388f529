use crate::Database;
use crate::error::{StoreError, StoreResult};
use crate::models::ChannelRow;
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

impl Database {
    pub fn channel_by_name(&self, name: &str) -> StoreResult<ChannelRow> {
        self.with_conn(|conn| {
            query_channel_by_name(conn, name)?.ok_or(StoreError::ChannelNotFound)
        })
    }

    /// Get-or-create. Channels are created lazily on first reference, so
    /// posting to a new channel name never fails on the channel side.
    pub fn ensure_channel(&self, name: &str) -> StoreResult<ChannelRow> {
        self.with_conn(|conn| ensure_channel(conn, name))
    }
}

pub(crate) fn ensure_channel(conn: &Connection, name: &str) -> StoreResult<ChannelRow> {
    if let Some(channel) = query_channel_by_name(conn, name)? {
        return Ok(channel);
    }

    // INSERT OR IGNORE covers the race where another writer created the
    // channel between the lookup and the insert.
    let inserted = conn.execute("INSERT OR IGNORE INTO channels (name) VALUES (?1)", [name])?;
    if inserted > 0 {
        debug!(channel = name, "Created channel on first reference");
    }

    query_channel_by_name(conn, name)?.ok_or(StoreError::ChannelNotFound)
}

pub(crate) fn query_channel_by_name(
    conn: &Connection,
    name: &str,
) -> StoreResult<Option<ChannelRow>> {
    let mut stmt = conn.prepare("SELECT id, name FROM channels WHERE name = ?1")?;

    let row = stmt
        .query_row([name], |row| {
            Ok(ChannelRow {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .optional()?;

    Ok(row)
}
