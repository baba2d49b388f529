use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub name: String,
}

/// The denormalized message shape handed to API consumers. The author's
/// display name and the channel name are resolved server-side so clients
/// never need a second round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user_id: i64,
    pub channel_name: String,
    /// Milliseconds since the Unix epoch, assigned by the store at insert.
    pub time: i64,
    /// The author's display name.
    pub name: String,
    pub content: String,
}
