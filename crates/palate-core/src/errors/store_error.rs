/// Errors raised by profile stores.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("profile has an empty user id")]
    EmptyUserId,

    #[error("snapshot contains user {user_id} more than once")]
    DuplicateUser { user_id: String },
}
