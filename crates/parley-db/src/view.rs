use crate::models::{ChannelRow, MessageRow, UserRow};
use parley_types::Message;

/// Flatten a stored message and its resolved author and channel into the
/// external message shape. Pure — how the three records were fetched (one
/// JOIN or separate lookups) is the caller's business.
pub fn assemble(message: &MessageRow, user: &UserRow, channel: &ChannelRow) -> Message {
    Message {
        id: message.id.clone(),
        user_id: user.id,
        channel_name: channel.name.clone(),
        time: message.time,
        name: user.name.clone(),
        content: message.content.clone(),
    }
}
