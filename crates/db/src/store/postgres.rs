//! [`Store`] adapter over a PostgreSQL pool, delegating to the repositories.

use async_trait::async_trait;
use qna_core::answer::ValidAnswer;
use qna_core::question::ValidQuestion;
use qna_core::types::DbId;

use super::{AnswerStore, QuestionStore, Store, StoreError, UserStore};
use crate::models::answer::Answer;
use crate::models::question::Question;
use crate::models::user::{CreateUser, User};
use crate::repositories::{AnswerRepo, QuestionRepo, UserRepo};
use crate::DbPool;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn find_user(&self, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_email(&self.pool, email).await?)
    }
}

#[async_trait]
impl QuestionStore for PgStore {
    async fn create_question(
        &self,
        user_id: DbId,
        input: &ValidQuestion,
    ) -> Result<Question, StoreError> {
        Ok(QuestionRepo::create(&self.pool, user_id, input).await?)
    }

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, StoreError> {
        Ok(QuestionRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(QuestionRepo::list(&self.pool).await?)
    }

    async fn update_question(
        &self,
        id: DbId,
        input: &ValidQuestion,
    ) -> Result<Option<Question>, StoreError> {
        Ok(QuestionRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_question(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(QuestionRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl AnswerStore for PgStore {
    async fn create_answer(
        &self,
        question_id: DbId,
        user_id: DbId,
        input: &ValidAnswer,
    ) -> Result<Answer, StoreError> {
        Ok(AnswerRepo::create(&self.pool, question_id, user_id, input).await?)
    }

    async fn find_answer(&self, id: DbId) -> Result<Option<Answer>, StoreError> {
        Ok(AnswerRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_answers(&self, question_id: DbId) -> Result<Vec<Answer>, StoreError> {
        Ok(AnswerRepo::list_by_question(&self.pool, question_id).await?)
    }

    async fn delete_answer(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(AnswerRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
