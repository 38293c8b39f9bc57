pub mod answers;
pub mod auth;
pub mod health;
pub mod questions;

use axum::Router;
use qna_core::types::DbId;

use crate::state::AppState;

/// Prefix every API route is nested under.
pub const API_PREFIX: &str = "/api/v1";

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                          register (public)
/// /auth/login                             login (public)
///
/// /questions                              index (public), create
/// /questions/new                          new form
/// /questions/{id}                         show (public), update, destroy
/// /questions/{id}/edit                    edit form
/// /questions/{id}/answers                 create answer
///
/// /answers/{id}                           destroy answer
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/questions", questions::router())
        .nest("/answers", answers::router())
}

/// Where an unauthenticated request is sent to sign in.
pub fn sign_in_path() -> String {
    format!("{API_PREFIX}/auth/login")
}

pub fn questions_path() -> String {
    format!("{API_PREFIX}/questions")
}

pub fn question_path(id: DbId) -> String {
    format!("{API_PREFIX}/questions/{id}")
}
