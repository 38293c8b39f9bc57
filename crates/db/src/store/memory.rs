//! In-process [`Store`] adapter.
//!
//! Mirrors the constraints the migrations put on PostgreSQL: unique emails,
//! foreign keys from answers to questions and users, and cascading deletes
//! from a question to its answers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use qna_core::answer::ValidAnswer;
use qna_core::question::ValidQuestion;
use qna_core::types::DbId;
use tokio::sync::RwLock;

use super::{AnswerStore, QuestionStore, Store, StoreError, UserStore};
use crate::models::answer::Answer;
use crate::models::question::Question;
use crate::models::user::{CreateUser, User};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<DbId, User>,
    questions: BTreeMap<DbId, Question>,
    answers: BTreeMap<DbId, Answer>,
    last_user_id: DbId,
    last_question_id: DbId,
    last_answer_id: DbId,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(last: &mut DbId) -> DbId {
    *last += 1;
    *last
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == input.email) {
            return Err(StoreError::UniqueViolation {
                constraint: "uq_users_email".to_string(),
            });
        }

        let now = Utc::now();
        let user = User {
            id: next_id(&mut tables.last_user_id),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn create_question(
        &self,
        user_id: DbId,
        input: &ValidQuestion,
    ) -> Result<Question, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user_id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "fk_questions_user".to_string(),
            });
        }

        let now = Utc::now();
        let question = Question {
            id: next_id(&mut tables.last_question_id),
            title: input.title().to_string(),
            body: input.body().to_string(),
            user_id,
            created_at: now,
            updated_at: now,
        };
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, StoreError> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn update_question(
        &self,
        id: DbId,
        input: &ValidQuestion,
    ) -> Result<Option<Question>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(question) = tables.questions.get_mut(&id) else {
            return Ok(None);
        };
        question.title = input.title().to_string();
        question.body = input.body().to_string();
        question.updated_at = Utc::now();
        Ok(Some(question.clone()))
    }

    async fn delete_question(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.questions.remove(&id).is_none() {
            return Ok(false);
        }
        let before = tables.answers.len();
        tables.answers.retain(|_, a| a.question_id != id);
        tracing::debug!(
            question_id = id,
            answers_removed = before - tables.answers.len(),
            "Cascaded question delete",
        );
        Ok(true)
    }
}

#[async_trait]
impl AnswerStore for MemoryStore {
    async fn create_answer(
        &self,
        question_id: DbId,
        user_id: DbId,
        input: &ValidAnswer,
    ) -> Result<Answer, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.questions.contains_key(&question_id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "fk_answers_question".to_string(),
            });
        }
        if !tables.users.contains_key(&user_id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "fk_answers_user".to_string(),
            });
        }

        let now = Utc::now();
        let answer = Answer {
            id: next_id(&mut tables.last_answer_id),
            body: input.body().to_string(),
            question_id,
            user_id,
            created_at: now,
            updated_at: now,
        };
        tables.answers.insert(answer.id, answer.clone());
        Ok(answer)
    }

    async fn find_answer(&self, id: DbId) -> Result<Option<Answer>, StoreError> {
        Ok(self.tables.read().await.answers.get(&id).cloned())
    }

    async fn list_answers(&self, question_id: DbId) -> Result<Vec<Answer>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .answers
            .values()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn delete_answer(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.answers.remove(&id).is_some())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
