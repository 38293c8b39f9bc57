//! Question entity model.

use qna_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A question row from the `questions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
