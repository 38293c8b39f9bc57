//! Handlers for answers: created under a question, deleted on their own.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use qna_core::answer::{NOTICE_CREATED, NOTICE_DELETED};
use qna_core::error::CoreError;
use qna_core::types::DbId;
use serde::Serialize;

use super::owner_gate;
use crate::error::{AppError, AppResult};
use crate::forms::AnswerForm;
use crate::middleware::auth::CurrentUser;
use crate::middleware::record_id::RecordId;
use crate::middleware::referer::Referer;
use crate::response::{Page, Redirect};
use crate::routes::question_path;
use crate::state::AppState;

/// The answer form re-rendered after a failed submission.
#[derive(Debug, Serialize)]
pub struct AnswerFormView {
    pub question_id: DbId,
    pub body: Option<String>,
}

/// POST /api/v1/questions/{id}/answers
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    RecordId(question_id): RecordId,
    body: Result<Json<AnswerForm>, JsonRejection>,
) -> AppResult<Response> {
    if state.store.find_question(question_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        }));
    }

    let Json(form) = body?;
    let draft = form.answer.into_draft();
    let valid = match draft.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            let view = AnswerFormView {
                question_id,
                body: draft.body,
            };
            return Ok(Page::invalid("answers/new", view, errors).into_response());
        }
    };

    let answer = state
        .store
        .create_answer(question_id, user.user_id, &valid)
        .await?;

    tracing::info!(
        answer_id = answer.id,
        question_id,
        user_id = user.user_id,
        "Answer created",
    );

    Ok(Redirect::to(question_path(question_id))
        .with_notice(NOTICE_CREATED)
        .into_response())
}

/// DELETE /api/v1/answers/{id}
pub async fn destroy(
    State(state): State<AppState>,
    user: CurrentUser,
    referer: Referer,
    RecordId(id): RecordId,
) -> AppResult<Response> {
    let answer = state
        .store
        .find_answer(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Answer",
            id,
        }))?;

    let back_to = question_path(answer.question_id);
    if let Some(denied) = owner_gate(user, answer.user_id, &referer, back_to.clone())? {
        return Ok(denied.into_response());
    }

    state.store.delete_answer(id).await?;
    tracing::info!(answer_id = id, user_id = user.user_id, "Answer deleted");

    Ok(Redirect::to(back_to)
        .with_notice(NOTICE_DELETED)
        .into_response())
}
