use crate::Database;
use crate::channels::ensure_channel;
use crate::error::{StoreError, StoreResult};
use crate::models::{ChannelRow, MessageRow, UserRow};
use crate::view;
use chrono::Utc;
use parley_types::Message;
use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

/// Joined projection shared by every message read: the raw message row plus
/// its author and channel. INNER JOINs, so a message whose references are
/// missing is simply unreadable.
const MESSAGE_SELECT: &str = "SELECT m.id, m.user_id, m.channel_id, m.time, m.content,
        u.name, u.credential, c.name
 FROM messages m
 INNER JOIN users u ON m.user_id = u.id
 INNER JOIN channels c ON m.channel_id = c.id";

impl Database {
    pub fn message_by_id(&self, id: &str) -> StoreResult<Message> {
        self.with_conn(|conn| {
            let sql = format!("{MESSAGE_SELECT} WHERE m.id = ?1");
            let mut stmt = conn.prepare(&sql)?;
            let message = stmt
                .query_row([id], map_joined_row)
                .optional()?
                .ok_or(StoreError::MessageNotFound)?;
            Ok(message)
        })
    }

    /// Every message in the channel, most recent first. An unknown channel
    /// name yields an empty list — to a reader it holds nothing either way.
    pub fn messages_in_channel(&self, channel_name: &str) -> StoreResult<Vec<Message>> {
        self.with_conn(|conn| {
            query_messages(
                conn,
                "WHERE c.name = ?1 ORDER BY m.time DESC",
                params![channel_name],
            )
        })
    }

    /// The "load older messages" page: strictly before `from_time`, at most
    /// `limit` rows. Strict inequality keeps the boundary message from
    /// reappearing on the next page.
    pub fn messages_before(
        &self,
        channel_name: &str,
        from_time: i64,
        limit: u32,
    ) -> StoreResult<Vec<Message>> {
        self.with_conn(|conn| {
            query_messages(
                conn,
                "WHERE c.name = ?1 AND m.time < ?2 ORDER BY m.time DESC LIMIT ?3",
                params![channel_name, from_time, limit],
            )
        })
    }

    /// Catch-up since last seen: strictly after `from_time`, unbounded.
    pub fn messages_after(&self, channel_name: &str, from_time: i64) -> StoreResult<Vec<Message>> {
        self.with_conn(|conn| {
            query_messages(
                conn,
                "WHERE c.name = ?1 AND m.time > ?2 ORDER BY m.time DESC",
                params![channel_name, from_time],
            )
        })
    }

    /// Messages with exactly this timestamp — ties from concurrent posts.
    pub fn messages_at(&self, channel_name: &str, time: i64) -> StoreResult<Vec<Message>> {
        self.with_conn(|conn| {
            query_messages(
                conn,
                "WHERE c.name = ?1 AND m.time = ?2 ORDER BY m.time DESC",
                params![channel_name, time],
            )
        })
    }

    /// Persist a new message and return its id. The store generates the id
    /// (v4 UUID) and the timestamp itself so uniqueness and ordering hold
    /// under concurrent callers. The author must exist; the channel is
    /// created lazily.
    pub fn insert_message(
        &self,
        channel_name: &str,
        user_id: i64,
        content: &str,
    ) -> StoreResult<String> {
        self.with_conn(|conn| {
            let user_exists: bool = conn
                .query_row("SELECT 1 FROM users WHERE id = ?1", [user_id], |_| Ok(()))
                .optional()?
                .is_some();
            if !user_exists {
                return Err(StoreError::UserNotFound);
            }
            let channel = ensure_channel(conn, channel_name)?;

            let id = Uuid::new_v4().to_string();
            let time = Utc::now().timestamp_millis();
            conn.execute(
                "INSERT INTO messages (id, user_id, channel_id, time, content)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, user_id, channel.id, time, content],
            )?;
            Ok(id)
        })
    }

    /// Replace a message's content. Id, author, channel and timestamp are
    /// immutable. Fails with `MessageNotFound` when no row was affected.
    pub fn update_message_content(&self, id: &str, content: &str) -> StoreResult<()> {
        self.with_conn(|conn| {
            let affected = conn.execute(
                "UPDATE messages SET content = ?2 WHERE id = ?1",
                params![id, content],
            )?;
            if affected == 0 {
                return Err(StoreError::MessageNotFound);
            }
            Ok(())
        })
    }

    /// Idempotent: deleting an absent id is not an error.
    pub fn delete_message(&self, id: &str) -> StoreResult<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM messages WHERE id = ?1", [id])?;
            Ok(())
        })
    }

    /// Remove every message in the channel. Idempotent; an unknown channel
    /// is a no-op.
    pub fn delete_channel_messages(&self, channel_name: &str) -> StoreResult<()> {
        self.with_conn(|conn| {
            conn.execute(
                "DELETE FROM messages WHERE channel_id IN
                     (SELECT id FROM channels WHERE name = ?1)",
                [channel_name],
            )?;
            Ok(())
        })
    }
}

fn query_messages(
    conn: &Connection,
    clause: &str,
    params: &[&dyn rusqlite::types::ToSql],
) -> StoreResult<Vec<Message>> {
    let sql = format!("{MESSAGE_SELECT} {clause}");
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt
        .query_map(params, map_joined_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Decompose one joined row into the three record types and run them through
/// the view assembler.
fn map_joined_row(row: &rusqlite::Row) -> rusqlite::Result<Message> {
    let message = MessageRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        channel_id: row.get(2)?,
        time: row.get(3)?,
        content: row.get(4)?,
    };
    let user = UserRow {
        id: message.user_id,
        name: row.get(5)?,
        credential: row.get(6)?,
    };
    let channel = ChannelRow {
        id: message.channel_id,
        name: row.get(7)?,
    };
    Ok(view::assemble(&message, &user, &channel))
}
