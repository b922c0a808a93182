use thiserror::Error;

/// Errors surfaced by the entity repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Owner-scoped lookup miss. One condition for both "wrong id" and
    /// "wrong owner"; callers must not distinguish the two.
    #[error("{0} not found or unauthorized")]
    NotFoundOrUnauthorized(&'static str),

    #[error("No fields to update")]
    NoFieldsToUpdate,

    /// Insert returned no row. Should not occur under normal operation.
    #[error("Failed to create {0}")]
    CreateFailed(&'static str),

    #[error("Quick command \"{command}\" is already assigned to \"{engine}\"")]
    DuplicateQuickCommand { command: String, engine: String },

    #[error("Category still contains bookmarks")]
    CategoryNotEmpty,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
