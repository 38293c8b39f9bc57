//! Principal extractors backed by JWT Bearer tokens.
//!
//! The principal is always an explicit handler parameter: handlers that need a
//! signed-in user take [`CurrentUser`], public handlers that only tailor their
//! output take [`MaybeUser`].

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use qna_core::error::CoreError;
use qna_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// A signed-in user.
///
/// Rejects with [`CoreError::Unauthenticated`], which responds with a redirect
/// to the sign-in endpoint.
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_principal(parts, state)
            .await?
            .map(|user_id| CurrentUser { user_id })
            .ok_or(AppError::Core(CoreError::Unauthenticated))
    }
}

/// The principal if the request carries a valid token, otherwise anonymous.
#[derive(Debug, Clone, Copy)]
pub struct MaybeUser(pub Option<DbId>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(resolve_principal(parts, state).await?))
    }
}

/// Resolve the `Authorization: Bearer <token>` header to an existing user id.
///
/// A missing header, a malformed or expired token, or a token for a user that
/// no longer exists all resolve to `None`. Only store failures are errors.
async fn resolve_principal(parts: &Parts, state: &AppState) -> Result<Option<DbId>, AppError> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let Some(token) = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
    else {
        tracing::debug!("Ignoring malformed Authorization header");
        return Ok(None);
    };

    let claims = match validate_token(token, &state.config.jwt) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid access token");
            return Ok(None);
        }
    };

    let user = state.store.find_user(claims.sub).await?;
    if user.is_none() {
        tracing::debug!(user_id = claims.sub, "Token subject no longer exists");
    }
    Ok(user.map(|u| u.id))
}
