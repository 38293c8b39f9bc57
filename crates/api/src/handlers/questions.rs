//! Handlers for the `/questions` resource.
//!
//! Every action that needs a signed-in user takes [`CurrentUser`]; actions on
//! an existing question load it first (404 when missing) and then run the
//! ownership gate before anything is written. Request bodies are decoded only
//! after the gate, so a non-owner is sent back whatever they submitted.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use qna_core::error::CoreError;
use qna_core::ownership::can_modify;
use qna_core::question::{QuestionDraft, NOTICE_CREATED, NOTICE_INVALID, NOTICE_UPDATED};
use qna_core::types::DbId;
use qna_db::models::answer::Answer;
use qna_db::models::question::Question;
use serde::Serialize;

use super::owner_gate;
use crate::error::{AppError, AppResult};
use crate::forms::QuestionForm;
use crate::middleware::auth::{CurrentUser, MaybeUser};
use crate::middleware::record_id::RecordId;
use crate::middleware::referer::Referer;
use crate::response::{Page, Redirect};
use crate::routes::{question_path, questions_path};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// The `show` page: a question, its answers, and what the viewer may do.
#[derive(Debug, Serialize)]
pub struct QuestionShow {
    pub question: Question,
    /// Whether the viewer may edit or delete the question.
    pub can_edit: bool,
    pub answers: Vec<AnswerItem>,
}

#[derive(Debug, Serialize)]
pub struct AnswerItem {
    #[serde(flatten)]
    pub answer: Answer,
    /// Whether the viewer may delete this answer.
    pub can_destroy: bool,
}

/// The `new` / `edit` form. `id` is `null` until the question is saved.
#[derive(Debug, Serialize)]
pub struct QuestionFormView {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: DbId,
}

impl QuestionFormView {
    fn from_draft(id: Option<DbId>, user_id: DbId, draft: QuestionDraft) -> Self {
        Self {
            id,
            title: draft.title,
            body: draft.body,
            user_id,
        }
    }

    fn from_question(question: Question) -> Self {
        Self {
            id: Some(question.id),
            title: Some(question.title),
            body: Some(question.body),
            user_id: question.user_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/questions
pub async fn index(State(state): State<AppState>) -> AppResult<Page<Vec<Question>>> {
    let questions = state.store.list_questions().await?;
    Ok(Page::new("index", questions))
}

/// GET /api/v1/questions/{id}
pub async fn show(
    State(state): State<AppState>,
    MaybeUser(principal): MaybeUser,
    RecordId(id): RecordId,
) -> AppResult<Page<QuestionShow>> {
    let question = load_question(&state, id).await?;
    let answers = state
        .store
        .list_answers(id)
        .await?
        .into_iter()
        .map(|answer| AnswerItem {
            can_destroy: can_modify(principal, answer.user_id),
            answer,
        })
        .collect();

    Ok(Page::new(
        "show",
        QuestionShow {
            can_edit: can_modify(principal, question.user_id),
            question,
            answers,
        },
    ))
}

/// GET /api/v1/questions/new
pub async fn new(user: CurrentUser) -> Page<QuestionFormView> {
    Page::new(
        "new",
        QuestionFormView::from_draft(None, user.user_id, QuestionDraft::new("", "")),
    )
}

/// POST /api/v1/questions
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<QuestionForm>, JsonRejection>,
) -> AppResult<Response> {
    let Json(form) = body?;
    let draft = form.question.into_draft();
    let valid = match draft.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            let view = QuestionFormView::from_draft(None, user.user_id, draft);
            return Ok(Page::invalid("new", view, errors).into_response());
        }
    };

    let question = state.store.create_question(user.user_id, &valid).await?;

    tracing::info!(
        question_id = question.id,
        user_id = user.user_id,
        "Question created",
    );

    Ok(Redirect::to(question_path(question.id))
        .with_notice(NOTICE_CREATED)
        .into_response())
}

/// GET /api/v1/questions/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    user: CurrentUser,
    referer: Referer,
    RecordId(id): RecordId,
) -> AppResult<Response> {
    let question = load_question(&state, id).await?;
    if let Some(denied) = owner_gate(user, question.user_id, &referer, question_path(id))? {
        return Ok(denied.into_response());
    }

    Ok(Page::new("edit", QuestionFormView::from_question(question)).into_response())
}

/// PATCH|PUT /api/v1/questions/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    referer: Referer,
    RecordId(id): RecordId,
    body: Result<Json<QuestionForm>, JsonRejection>,
) -> AppResult<Response> {
    let question = load_question(&state, id).await?;
    if let Some(denied) = owner_gate(user, question.user_id, &referer, question_path(id))? {
        return Ok(denied.into_response());
    }

    let Json(form) = body?;
    let draft = form.question.apply_to(&question);
    let valid = match draft.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            let view = QuestionFormView::from_draft(Some(id), question.user_id, draft);
            return Ok(Page::invalid("edit", view, errors)
                .with_notice(NOTICE_INVALID)
                .into_response());
        }
    };

    let question = state
        .store
        .update_question(id, &valid)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    tracing::info!(question_id = id, user_id = user.user_id, "Question updated");

    Ok(Redirect::to(question_path(question.id))
        .with_notice(NOTICE_UPDATED)
        .into_response())
}

/// DELETE /api/v1/questions/{id}
///
/// Deletes the question's answers along with it.
pub async fn destroy(
    State(state): State<AppState>,
    user: CurrentUser,
    referer: Referer,
    RecordId(id): RecordId,
) -> AppResult<Response> {
    let question = load_question(&state, id).await?;
    if let Some(denied) = owner_gate(user, question.user_id, &referer, question_path(id))? {
        return Ok(denied.into_response());
    }

    let deleted = state.store.delete_question(id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }

    tracing::info!(question_id = id, user_id = user.user_id, "Question deleted");

    Ok(Redirect::to(questions_path()).into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn load_question(state: &AppState, id: DbId) -> AppResult<Question> {
    state
        .store
        .find_question(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))
}
