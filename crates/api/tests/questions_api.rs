//! HTTP-level integration tests for the `/questions` resource.
//!
//! Each test builds the full router over a fresh in-memory store, seeds it
//! directly, and drives the API with `tower::ServiceExt::oneshot`.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    body_json, create_question, create_user, delete, delete_auth, get, get_auth, location,
    patch_json_auth, post_json, post_json_auth, send, test_app,
};
use qna_core::answer::AnswerDraft;
use qna_db::store::{AnswerStore, QuestionStore};
use serde_json::json;

// ---------------------------------------------------------------------------
// index / show
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_lists_all_questions_in_id_order_without_auth() {
    let (store, app) = test_app();
    let (alice, _) = create_user(&store, "alice@example.com").await;
    let (bob, _) = create_user(&store, "bob@example.com").await;
    let first = create_question(&store, alice.id).await;
    let second = create_question(&store, bob.id).await;

    let response = get(app, "/api/v1/questions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["view"], "index");
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn show_renders_every_answer() {
    let (store, app) = test_app();
    let (owner, _) = create_user(&store, "owner@example.com").await;
    let question = create_question(&store, owner.id).await;
    for n in 0..5 {
        let valid = AnswerDraft::new(format!("Answer {n}")).validate().unwrap();
        store
            .create_answer(question.id, owner.id, &valid)
            .await
            .unwrap();
    }

    let response = get(app, &format!("/api/v1/questions/{}", question.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["view"], "show");
    assert_eq!(json["data"]["question"]["title"], "MyTitle");
    assert_eq!(json["data"]["answers"].as_array().unwrap().len(), 5);
    assert_eq!(json["data"]["answers"][0]["body"], "Answer 0");
}

#[tokio::test]
async fn show_is_stable_across_repeated_reads() {
    let (store, app) = test_app();
    let (owner, _) = create_user(&store, "owner@example.com").await;
    let question = create_question(&store, owner.id).await;
    let uri = format!("/api/v1/questions/{}", question.id);

    let first = body_json(get(app.clone(), &uri).await).await;
    let second = body_json(get(app, &uri).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn show_affordances_follow_ownership() {
    let (store, app) = test_app();
    let (owner, owner_token) = create_user(&store, "owner@example.com").await;
    let (_other, other_token) = create_user(&store, "other@example.com").await;
    let question = create_question(&store, owner.id).await;
    let uri = format!("/api/v1/questions/{}", question.id);

    let anonymous = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(anonymous["data"]["can_edit"], false);

    let as_owner = body_json(get_auth(app.clone(), &uri, &owner_token).await).await;
    assert_eq!(as_owner["data"]["can_edit"], true);

    let as_other = body_json(get_auth(app, &uri, &other_token).await).await;
    assert_eq!(as_other["data"]["can_edit"], false);
}

#[tokio::test]
async fn show_missing_question_returns_404() {
    let (_store, app) = test_app();

    let response = get(app, "/api/v1/questions/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// new / create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_form_is_an_unsaved_question_owned_by_the_principal() {
    let (store, app) = test_app();
    let (user, token) = create_user(&store, "user@example.com").await;

    let response = get_auth(app, "/api/v1/questions/new", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["view"], "new");
    assert!(json["data"]["id"].is_null());
    assert_eq!(json["data"]["title"], "");
    assert_eq!(json["data"]["user_id"], user.id);
}

#[tokio::test]
async fn new_form_requires_sign_in() {
    let (_store, app) = test_app();

    let response = get(app, "/api/v1/questions/new").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/v1/auth/login");
}

#[tokio::test]
async fn create_persists_and_redirects_to_show() {
    let (store, app) = test_app();
    let (user, token) = create_user(&store, "user@example.com").await;
    let body = json!({ "question": { "title": "New title", "body": "New body" } });

    let response = post_json_auth(app, "/api/v1/questions", &token, body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let questions = store.list_questions().await.unwrap();
    assert_eq!(questions.len(), 1);
    let created = &questions[0];
    assert_eq!(created.title, "New title");
    assert_eq!(created.body, "New body");
    assert_eq!(created.user_id, user.id);

    let expected = format!("/api/v1/questions/{}", created.id);
    assert_eq!(location(&response), expected);
    let json = body_json(response).await;
    assert_eq!(json["redirect_to"], expected);
    assert_eq!(json["notice"], "Your question successfully created.");
}

#[tokio::test]
async fn create_ignores_a_submitted_owner() {
    let (store, app) = test_app();
    let (user, token) = create_user(&store, "user@example.com").await;
    let (other, _) = create_user(&store, "other@example.com").await;
    let body = json!({
        "question": { "title": "T", "body": "B", "user_id": other.id, "id": 77 }
    });

    let response = post_json_auth(app, "/api/v1/questions", &token, body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let questions = store.list_questions().await.unwrap();
    assert_eq!(questions[0].user_id, user.id);
    assert_ne!(questions[0].id, 77);
}

#[tokio::test]
async fn create_with_blank_fields_rerenders_the_form() {
    let (store, app) = test_app();
    let (_user, token) = create_user(&store, "user@example.com").await;
    let body = json!({ "question": { "title": "   ", "body": "Kept body" } });

    let response = post_json_auth(app, "/api/v1/questions", &token, body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["view"], "new");
    assert_eq!(json["data"]["body"], "Kept body");
    assert_eq!(json["errors"][0]["field"], "title");
    assert!(store.list_questions().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_requires_sign_in() {
    let (store, app) = test_app();
    let body = json!({ "question": { "title": "T", "body": "B" } });

    let response = post_json(app, "/api/v1/questions", body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/v1/auth/login");
    assert!(store.list_questions().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_with_an_invalid_token_is_treated_as_anonymous() {
    let (store, app) = test_app();
    let body = json!({ "question": { "title": "T", "body": "B" } });

    let response = post_json_auth(app, "/api/v1/questions", "not-a-jwt", body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(store.list_questions().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// edit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_renders_the_stored_question_for_its_owner() {
    let (store, app) = test_app();
    let (owner, token) = create_user(&store, "owner@example.com").await;
    let question = create_question(&store, owner.id).await;

    let response = get_auth(app, &format!("/api/v1/questions/{}/edit", question.id), &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["view"], "edit");
    assert_eq!(json["data"]["id"], question.id);
    assert_eq!(json["data"]["title"], "MyTitle");
}

#[tokio::test]
async fn edit_by_non_owner_redirects_without_change() {
    let (store, app) = test_app();
    let (owner, _) = create_user(&store, "owner@example.com").await;
    let (_other, other_token) = create_user(&store, "other@example.com").await;
    let question = create_question(&store, owner.id).await;

    let response = get_auth(
        app,
        &format!("/api/v1/questions/{}/edit", question.id),
        &other_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!("/api/v1/questions/{}", question.id)
    );
    let stored = store.find_question(question.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "MyTitle");
}

#[tokio::test]
async fn edit_by_non_owner_goes_back_to_the_referer_path() {
    let (store, app) = test_app();
    let (owner, _) = create_user(&store, "owner@example.com").await;
    let (_other, other_token) = create_user(&store, "other@example.com").await;
    let question = create_question(&store, owner.id).await;

    let response = send(
        app,
        Method::GET,
        &format!("/api/v1/questions/{}/edit", question.id),
        Some(&other_token),
        Some("http://somewhere.example/api/v1/questions?page=2"),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/v1/questions?page=2");
    let json = body_json(response).await;
    assert!(json.get("notice").is_none());
}

#[tokio::test]
async fn edit_checks_sign_in_before_existence() {
    let (_store, app) = test_app();

    let response = get(app, "/api/v1/questions/999/edit").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/v1/auth/login");
}

#[tokio::test]
async fn edit_missing_question_returns_404() {
    let (store, app) = test_app();
    let (_user, token) = create_user(&store, "user@example.com").await;

    let response = get_auth(app, "/api/v1/questions/999/edit", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn owner_updates_title_and_keeps_unsubmitted_body() {
    let (store, app) = test_app();
    let (owner, token) = create_user(&store, "owner@example.com").await;
    let question = create_question(&store, owner.id).await;
    let uri = format!("/api/v1/questions/{}", question.id);

    let response = patch_json_auth(
        app,
        &uri,
        &token,
        json!({ "question": { "title": "new_title" } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), uri);
    let json = body_json(response).await;
    assert_eq!(json["notice"], "Question was successfully update!");

    let stored = store.find_question(question.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "new_title");
    assert_eq!(stored.body, "MyText");
}

#[tokio::test]
async fn put_is_accepted_like_patch() {
    let (store, app) = test_app();
    let (owner, token) = create_user(&store, "owner@example.com").await;
    let question = create_question(&store, owner.id).await;

    let response = send(
        app,
        Method::PUT,
        &format!("/api/v1/questions/{}", question.id),
        Some(&token),
        None,
        Some(json!({ "question": { "title": "T2", "body": "B2" } })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let stored = store.find_question(question.id).await.unwrap().unwrap();
    assert_eq!((stored.title.as_str(), stored.body.as_str()), ("T2", "B2"));
}

#[tokio::test]
async fn owner_update_with_blank_fields_changes_nothing() {
    let (store, app) = test_app();
    let (owner, token) = create_user(&store, "owner@example.com").await;
    let question = create_question(&store, owner.id).await;

    let response = patch_json_auth(
        app,
        &format!("/api/v1/questions/{}", question.id),
        &token,
        json!({ "question": { "title": "", "body": "" } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["view"], "edit");
    assert_eq!(json["notice"], "You fill invalid data!");
    assert_eq!(json["errors"].as_array().unwrap().len(), 2);

    let stored = store.find_question(question.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "MyTitle");
    assert_eq!(stored.body, "MyText");
    assert_eq!(stored.updated_at, question.updated_at);
}

#[tokio::test]
async fn explicit_null_counts_as_blank_on_update() {
    let (store, app) = test_app();
    let (owner, token) = create_user(&store, "owner@example.com").await;
    let question = create_question(&store, owner.id).await;

    let response = patch_json_auth(
        app,
        &format!("/api/v1/questions/{}", question.id),
        &token,
        json!({ "question": { "body": null } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let stored = store.find_question(question.id).await.unwrap().unwrap();
    assert_eq!(stored.body, "MyText");
}

#[tokio::test]
async fn non_owner_update_redirects_and_changes_nothing() {
    let (store, app) = test_app();
    let (owner, _) = create_user(&store, "owner@example.com").await;
    let (_other, other_token) = create_user(&store, "other@example.com").await;
    let question = create_question(&store, owner.id).await;

    let response = patch_json_auth(
        app,
        &format!("/api/v1/questions/{}", question.id),
        &other_token,
        json!({ "question": { "title": "hijacked" } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let stored = store.find_question(question.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "MyTitle");
}

// ---------------------------------------------------------------------------
// destroy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn owner_destroys_question_and_its_answers() {
    let (store, app) = test_app();
    let (owner, token) = create_user(&store, "owner@example.com").await;
    let (other, _) = create_user(&store, "other@example.com").await;
    let question = create_question(&store, owner.id).await;
    let valid = AnswerDraft::new("An answer").validate().unwrap();
    let answer = store
        .create_answer(question.id, other.id, &valid)
        .await
        .unwrap();

    let response = delete_auth(app, &format!("/api/v1/questions/{}", question.id), &token).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/v1/questions");
    assert!(store.find_question(question.id).await.unwrap().is_none());
    assert!(store.find_answer(answer.id).await.unwrap().is_none());
}

#[tokio::test]
async fn non_owner_destroy_keeps_the_question() {
    let (store, app) = test_app();
    let (owner, _) = create_user(&store, "owner@example.com").await;
    let (_other, other_token) = create_user(&store, "other@example.com").await;
    let question = create_question(&store, owner.id).await;

    let response = delete_auth(
        app,
        &format!("/api/v1/questions/{}", question.id),
        &other_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(store.find_question(question.id).await.unwrap().is_some());
}

#[tokio::test]
async fn anonymous_destroy_redirects_to_sign_in() {
    let (store, app) = test_app();
    let (owner, _) = create_user(&store, "owner@example.com").await;
    let question = create_question(&store, owner.id).await;

    let response = delete(app, &format!("/api/v1/questions/{}", question.id)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/v1/auth/login");
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHENTICATED");
    assert!(store.find_question(question.id).await.unwrap().is_some());
}

#[tokio::test]
async fn destroy_missing_question_returns_404() {
    let (store, app) = test_app();
    let (_user, token) = create_user(&store, "user@example.com").await;

    let response = delete_auth(app, "/api/v1/questions/999", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// gate ordering and ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_owner_update_goes_back_whatever_the_body() {
    let (store, app) = test_app();
    let (owner, _) = create_user(&store, "owner@example.com").await;
    let (_other, other_token) = create_user(&store, "other@example.com").await;
    let question = create_question(&store, owner.id).await;
    let uri = format!("/api/v1/questions/{}", question.id);

    let unwrapped = send(
        app.clone(),
        Method::PATCH,
        &uri,
        Some(&other_token),
        Some("/api/v1/questions"),
        Some(json!({ "title": "hijacked" })),
    )
    .await;
    assert_eq!(unwrapped.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&unwrapped), "/api/v1/questions");

    let empty = send(
        app,
        Method::PATCH,
        &uri,
        Some(&other_token),
        Some("/api/v1/questions"),
        None,
    )
    .await;
    assert_eq!(empty.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&empty), "/api/v1/questions");

    let stored = store.find_question(question.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "MyTitle");
}

#[tokio::test]
async fn owner_update_without_envelope_is_an_invalid_body() {
    let (store, app) = test_app();
    let (owner, token) = create_user(&store, "owner@example.com").await;
    let question = create_question(&store, owner.id).await;

    let response = patch_json_auth(
        app,
        &format!("/api/v1/questions/{}", question.id),
        &token,
        json!({ "title": "new_title" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_BODY");
    let stored = store.find_question(question.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "MyTitle");
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let (store, app) = test_app();
    let (_user, token) = create_user(&store, "user@example.com").await;

    let show = get(app.clone(), "/api/v1/questions/abc").await;
    assert_eq!(show.status(), StatusCode::NOT_FOUND);
    let json = body_json(show).await;
    assert_eq!(json["code"], "NOT_FOUND");

    let edit = get_auth(app, "/api/v1/questions/abc/edit", &token).await;
    assert_eq!(edit.status(), StatusCode::NOT_FOUND);
}
