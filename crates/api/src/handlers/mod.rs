pub mod answers;
pub mod auth;
pub mod questions;

use qna_core::error::CoreError;
use qna_core::ownership::{authorize_owner, AccessDenied};
use qna_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;
use crate::middleware::referer::Referer;
use crate::response::Redirect;

/// Run the ownership gate for a mutation on a resource owned by `owner_id`.
///
/// `Ok(None)` lets the action proceed. `Ok(Some(redirect))` sends a non-owner
/// back where they came from (or to `fallback`) without saying why.
pub(crate) fn owner_gate(
    user: CurrentUser,
    owner_id: DbId,
    referer: &Referer,
    fallback: String,
) -> AppResult<Option<Redirect>> {
    match authorize_owner(Some(user.user_id), owner_id) {
        Ok(_) => Ok(None),
        Err(AccessDenied::NotOwner) => {
            tracing::info!(user_id = user.user_id, owner_id, "Ownership check failed");
            Ok(Some(Redirect::back(referer, fallback)))
        }
        Err(AccessDenied::Unauthenticated) => Err(CoreError::Unauthenticated.into()),
    }
}
