//! The persistence port.
//!
//! HTTP handlers depend on [`Store`] rather than on a connection pool so the
//! same handlers run against PostgreSQL in production ([`PgStore`]) and an
//! in-process map in tests and database-less dev runs ([`MemoryStore`]).

use async_trait::async_trait;
use qna_core::answer::ValidAnswer;
use qna_core::question::ValidQuestion;
use qna_core::types::DbId;

use crate::models::answer::Answer;
use crate::models::question::Question;
use crate::models::user::{CreateUser, User};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errors raised by store adapters.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("Referenced row does not exist: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return StoreError::UniqueViolation { constraint },
                Some(FOREIGN_KEY_VIOLATION) => {
                    return StoreError::ForeignKeyViolation { constraint }
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. A taken email fails with [`StoreError::UniqueViolation`].
    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError>;

    async fn find_user(&self, id: DbId) -> Result<Option<User>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn create_question(
        &self,
        user_id: DbId,
        input: &ValidQuestion,
    ) -> Result<Question, StoreError>;

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, StoreError>;

    /// Every question, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Replace title and body; `None` when the question does not exist.
    async fn update_question(
        &self,
        id: DbId,
        input: &ValidQuestion,
    ) -> Result<Option<Question>, StoreError>;

    /// Delete a question together with its answers.
    async fn delete_question(&self, id: DbId) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Insert an answer. A missing question or user fails with
    /// [`StoreError::ForeignKeyViolation`].
    async fn create_answer(
        &self,
        question_id: DbId,
        user_id: DbId,
        input: &ValidAnswer,
    ) -> Result<Answer, StoreError>;

    async fn find_answer(&self, id: DbId) -> Result<Option<Answer>, StoreError>;

    /// Answers on a question, ordered by id.
    async fn list_answers(&self, question_id: DbId) -> Result<Vec<Answer>, StoreError>;

    async fn delete_answer(&self, id: DbId) -> Result<bool, StoreError>;
}

/// Everything the HTTP layer needs from persistence.
#[async_trait]
pub trait Store: UserStore + QuestionStore + AnswerStore {
    /// Check that the backing storage is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
