pub mod models;

pub use models::{Channel, Message, User};
