#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION, REFERER};
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use qna_api::auth::jwt::{generate_access_token, JwtConfig};
use qna_api::config::ServerConfig;
use qna_api::router::build_app_router;
use qna_api::state::AppState;
use qna_core::question::QuestionDraft;
use qna_core::types::DbId;
use qna_db::models::question::Question;
use qna_db::models::user::{CreateUser, User};
use qna_db::store::{MemoryStore, QuestionStore, UserStore};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router over the given in-memory store.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh store and the app built over it.
pub fn test_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app(Arc::clone(&store));
    (store, app)
}

/// Insert a user directly and return it with a valid access token.
///
/// The stored hash is never checked by these tests, so it is a placeholder.
pub async fn create_user(store: &MemoryStore, email: &str) -> (User, String) {
    let user = store
        .create_user(&CreateUser {
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
        })
        .await
        .expect("user creation should succeed");
    let token = generate_access_token(user.id, &test_config().jwt).expect("token");
    (user, token)
}

/// Insert a valid question owned by `user_id`.
pub async fn create_question(store: &MemoryStore, user_id: DbId) -> Question {
    let valid = QuestionDraft::new("MyTitle", "MyText")
        .validate()
        .expect("draft is valid");
    store
        .create_question(user_id, &valid)
        .await
        .expect("question creation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send one request through the app.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    referer: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    if let Some(referer) = referer {
        builder = builder.header(REFERER, referer);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, Some(token), None, Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PATCH, uri, Some(token), None, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None, None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None, None).await
}

/// Parse the response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}
