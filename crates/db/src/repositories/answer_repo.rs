//! Repository for the `answers` table.

use qna_core::answer::ValidAnswer;
use qna_core::types::DbId;
use sqlx::PgPool;

use crate::models::answer::Answer;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, body, question_id, user_id, created_at, updated_at";

/// Provides create, lookup, and delete for answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert a new answer on `question_id` owned by `user_id`.
    pub async fn create(
        pool: &PgPool,
        question_id: DbId,
        user_id: DbId,
        input: &ValidAnswer,
    ) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO answers (body, question_id, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(input.body())
            .bind(question_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find an answer by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the answers on a question in insertion order.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE question_id = $1 ORDER BY id");
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an answer by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
