//! Answer entity model.

use qna_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An answer row from the `answers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub body: String,
    pub question_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
