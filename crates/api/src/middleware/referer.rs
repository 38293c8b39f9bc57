use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::REFERER;
use axum::http::request::Parts;
use axum::http::Uri;

/// Path and query of the `Referer` header, if it carries a usable one.
///
/// Scheme and host are dropped so a redirect back never leaves the service.
#[derive(Debug, Clone, Default)]
pub struct Referer(Option<String>);

impl Referer {
    pub fn path(&self) -> Option<&str> {
        self.0.as_deref()
    }

    fn parse(raw: &str) -> Option<String> {
        let uri: Uri = raw.parse().ok()?;
        let path = uri.path_and_query()?.as_str();
        // `//host/...` would be read by clients as another origin.
        (path.starts_with('/') && !path.starts_with("//")).then(|| path.to_string())
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Referer {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let referer = parts
            .headers
            .get(REFERER)
            .and_then(|v| v.to_str().ok())
            .and_then(Referer::parse);
        Ok(Referer(referer))
    }
}
