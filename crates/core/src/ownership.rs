//! The ownership gate for mutating questions and answers.
//!
//! A principal is the id of the signed-in user, or `None` for an anonymous
//! request. Handlers call these checks explicitly before touching an entity
//! and turn the [`AccessDenied`] tag into the matching response.

use crate::types::DbId;

/// Why a principal may not perform an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    /// No principal was supplied.
    Unauthenticated,
    /// A principal was supplied but does not own the resource.
    NotOwner,
}

/// Require a signed-in principal and return its id.
pub fn require_principal(principal: Option<DbId>) -> Result<DbId, AccessDenied> {
    principal.ok_or(AccessDenied::Unauthenticated)
}

/// Require a signed-in principal that owns the resource owned by `owner_id`.
pub fn authorize_owner(principal: Option<DbId>, owner_id: DbId) -> Result<DbId, AccessDenied> {
    let user_id = require_principal(principal)?;
    if user_id != owner_id {
        return Err(AccessDenied::NotOwner);
    }
    Ok(user_id)
}

/// Whether the principal would pass [`authorize_owner`]; used to decide which
/// edit/delete affordances a viewer is shown.
pub fn can_modify(principal: Option<DbId>, owner_id: DbId) -> bool {
    authorize_owner(principal, owner_id).is_ok()
}
