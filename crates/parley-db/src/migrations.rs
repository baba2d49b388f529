use crate::StoreResult;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL UNIQUE,
            credential  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS channels (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS messages (
            id          TEXT PRIMARY KEY,
            user_id     INTEGER NOT NULL REFERENCES users(id),
            channel_id  INTEGER NOT NULL REFERENCES channels(id),
            time        INTEGER NOT NULL,
            content     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_messages_channel_time
            ON messages(channel_id, time);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
