use thiserror::Error;

/// Store failures, split the way callers need to branch on them: absence,
/// uniqueness conflicts, and everything the storage engine reports itself.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user not found")]
    UserNotFound,
    #[error("channel not found")]
    ChannelNotFound,
    #[error("message not found")]
    MessageNotFound,
    #[error("name already taken")]
    NameTaken,
    #[error("database lock poisoned")]
    LockPoisoned,
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::UserNotFound | StoreError::ChannelNotFound | StoreError::MessageNotFound
        )
    }
}

/// True when the error is SQLite's unique-constraint violation, used to map
/// duplicate names onto `NameTaken`.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
