use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{answers, questions};
use crate::state::AppState;

/// Question routes mounted at `/questions`.
///
/// ```text
/// GET    /                      -> index
/// POST   /                      -> create
/// GET    /new                   -> new
/// GET    /{id}                  -> show
/// PATCH  /{id}                  -> update
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> destroy
/// GET    /{id}/edit             -> edit
/// POST   /{id}/answers          -> answers::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(questions::index).post(questions::create))
        .route("/new", get(questions::new))
        .route(
            "/{id}",
            get(questions::show)
                .patch(questions::update)
                .put(questions::update)
                .delete(questions::destroy),
        )
        .route("/{id}/edit", get(questions::edit))
        .route("/{id}/answers", post(answers::create))
}
