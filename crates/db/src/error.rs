use qna_core::CoreError;

/// Error type for repository operations.
///
/// Input validation failures surface as [`CoreError::Validation`] before
/// any SQL executes; everything that reaches the database comes back as
/// [`sqlx::Error`].
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// True if this is a validation failure rather than a database error.
    pub fn is_validation(&self) -> bool {
        matches!(self, DbError::Core(CoreError::Validation(_)))
    }
}
