//! Request extractors shared by handlers.
//!
//! - [`auth::CurrentUser`] -- Requires a signed-in principal.
//! - [`auth::MaybeUser`] -- Resolves the principal if there is one.
//! - [`record_id::RecordId`] -- The `{id}` path segment; unparsable ids are 404.
//! - [`referer::Referer`] -- The referring page, for redirecting back.

pub mod auth;
pub mod record_id;
pub mod referer;
