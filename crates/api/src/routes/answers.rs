use axum::routing::delete;
use axum::Router;

use crate::handlers::answers;
use crate::state::AppState;

/// Answer routes mounted at `/answers`.
///
/// ```text
/// DELETE /{id}  -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(answers::destroy))
}
