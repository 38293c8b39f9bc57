//! Response types returned by the question and answer handlers.
//!
//! A handler either renders a [`Page`] (a JSON view model standing in for a
//! template) or sends a [`Redirect`]. Both carry an optional notice, the
//! one-line message a browser client would show as a flash.

use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use qna_core::validation::ValidationErrors;
use serde::Serialize;

use crate::error::AppError;
use crate::middleware::referer::Referer;

/// A rendered view: `{ "view": ..., "data": ..., "notice"?: ..., "errors"?: ... }`.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub view: &'static str,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> Page<T> {
    /// A `200 OK` view.
    pub fn new(view: &'static str, data: T) -> Self {
        Self {
            view,
            data,
            notice: None,
            errors: None,
            status: StatusCode::OK,
        }
    }

    /// A form re-rendered with its validation errors (`422`).
    pub fn invalid(view: &'static str, data: T, errors: ValidationErrors) -> Self {
        Self {
            view,
            data,
            notice: None,
            errors: Some(errors),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn with_notice(mut self, notice: &'static str) -> Self {
        self.notice = Some(notice);
        self
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// A `303 See Other` with a `Location` header and a
/// `{ "redirect_to": ..., "notice"?: ... }` body.
#[derive(Debug, Serialize)]
pub struct Redirect {
    pub redirect_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            redirect_to: location.into(),
            notice: None,
        }
    }

    /// Back to the referring page, or `fallback` when there is none.
    pub fn back(referer: &Referer, fallback: impl Into<String>) -> Self {
        match referer.path() {
            Some(path) => Self::to(path),
            None => Self::to(fallback),
        }
    }

    pub fn with_notice(mut self, notice: &'static str) -> Self {
        self.notice = Some(notice);
        self
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        let Ok(location) = HeaderValue::from_str(&self.redirect_to) else {
            return AppError::InternalError(format!(
                "Redirect target is not a valid header value: {:?}",
                self.redirect_to
            ))
            .into_response();
        };
        (StatusCode::SEE_OTHER, [(LOCATION, location)], Json(self)).into_response()
    }
}
