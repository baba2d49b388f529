/// Database row types — these map directly to SQLite rows.
/// Distinct from the parley-types API models to keep the DB layer independent.

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub credential: String,
}

#[derive(Debug, Clone)]
pub struct ChannelRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct MessageRow {
    pub id: String,
    pub user_id: i64,
    pub channel_id: i64,
    /// Milliseconds since the Unix epoch.
    pub time: i64,
    pub content: String,
}
