//! Page-level error type.

use http::StatusCode;
use thiserror::Error;

/// Errors raised while resolving or rendering a page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageError {
    /// No page lives at this path.
    #[error("Page not found: {0}")]
    NotFound(String),

    /// The path exists but not for this method.
    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed {
        method: String,
        path: String,
        allowed: &'static str,
    },

    /// The request is malformed (e.g. a missing form field).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Site configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A page failed to render or stream.
    #[error("Render error: {0}")]
    Render(String),
}

impl PageError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::Config(_) | PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value for the `Allow` header on 405 responses.
    pub fn allow_header(&self) -> Option<&'static str> {
        match self {
            PageError::MethodNotAllowed { allowed, .. } => Some(*allowed),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for PageError {
    fn from(err: toml::de::Error) -> Self {
        PageError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PageError {
    fn from(err: toml::ser::Error) -> Self {
        PageError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PageError::NotFound("/x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            PageError::Config("bad".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let err = PageError::MethodNotAllowed {
            method: "DELETE".into(),
            path: "/".into(),
            allowed: "GET, HEAD",
        };
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.allow_header(), Some("GET, HEAD"));
        assert_eq!(err.to_string(), "Method DELETE not allowed on /");
    }
}
