//! Repository for the `questions` table.

use qna_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::question::{CreateQuestion, Question, UpdateQuestion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, created_at, modified_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    ///
    /// Input is validated against the length bounds before the insert; the
    /// schema's CHECK constraints back the same rules at the database level.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, DbError> {
        input.validate()?;
        let query = format!(
            "INSERT INTO questions (title, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await?;
        tracing::debug!(id = question.id, "question created");
        Ok(question)
    }

    /// Find a question by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(question)
    }

    /// List all questions ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Question>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY created_at DESC, id DESC");
        let questions = sqlx::query_as::<_, Question>(&query)
            .fetch_all(pool)
            .await?;
        Ok(questions)
    }

    /// Update a question. Only non-`None` fields in `input` are applied.
    ///
    /// `modified_at` is refreshed by the `BEFORE UPDATE` trigger;
    /// `created_at` is never touched. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, DbError> {
        input.validate()?;
        let query = format!(
            "UPDATE questions SET
                title = COALESCE($2, title),
                content = COALESCE($3, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await?;
        if question.is_some() {
            tracing::debug!(id, "question updated");
        }
        Ok(question)
    }

    /// Delete a question by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of questions.
    pub async fn count(pool: &PgPool) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
