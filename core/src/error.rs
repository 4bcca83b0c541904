//! Error types for the Whapi client.
//!
//! # Design
//! Validation failures and remote failures share one error type,
//! `WhapiError`, so callers have a single handling path. `ErrorKind` is the
//! discriminant callers match on when they do not care about the payload.
//!
//! Validation failures carry an `AppError` record (message, title, code,
//! type tag, locale). Transport failures keep the transport's own error
//! object untouched behind `source()`.

use std::error::Error as StdError;

/// Locale attached to validation errors when the caller gives none.
pub const DEFAULT_LOCALE: &str = "en";

/// Boxed error produced by a `Transport` implementation.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Discriminant shared by every `WhapiError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input rejected locally, before any request was built.
    BadRequest,

    /// The transport failed to complete the round-trip.
    Transport,

    /// The server answered with a non-2xx status.
    Http,

    /// The request payload could not be serialized to JSON.
    Serialization,

    /// The response body was not valid JSON.
    Deserialization,
}

impl ErrorKind {
    /// The wire-style type tag, e.g. `"BAD_REQUEST"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::Transport => "TRANSPORT_ERROR",
            ErrorKind::Http => "HTTP_ERROR",
            ErrorKind::Serialization => "SERIALIZATION_ERROR",
            ErrorKind::Deserialization => "DESERIALIZATION_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application error record raised at a validation site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{title}: {message}")]
pub struct AppError {
    pub message: String,
    pub title: String,
    pub code: Option<u16>,
    pub kind: ErrorKind,
    pub locale: String,
}

impl AppError {
    pub fn new(
        message: impl Into<String>,
        title: impl Into<String>,
        kind: ErrorKind,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            title: title.into(),
            code: None,
            kind,
            locale: locale.into(),
        }
    }

    /// A 400 `BAD_REQUEST` record titled `"Error"`.
    ///
    /// `locale` falls back to [`DEFAULT_LOCALE`].
    pub fn bad_request(message: impl Into<String>, locale: Option<&str>) -> Self {
        Self {
            code: Some(400),
            ..Self::new(
                message,
                "Error",
                ErrorKind::BadRequest,
                locale.unwrap_or(DEFAULT_LOCALE),
            )
        }
    }
}

/// Errors returned by every `WhapiClient` operation.
#[derive(Debug, thiserror::Error)]
pub enum WhapiError {
    /// Input rejected before any network activity.
    #[error(transparent)]
    Validation(#[from] AppError),

    /// The transport failed. The inner error is exactly what the transport
    /// returned.
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be decoded as JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl WhapiError {
    /// Shorthand for a `BAD_REQUEST` validation error in the default locale.
    pub fn bad_request(message: impl Into<String>) -> Self {
        WhapiError::Validation(AppError::bad_request(message, None))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            WhapiError::Validation(app) => app.kind,
            WhapiError::Transport(_) => ErrorKind::Transport,
            WhapiError::Http { .. } => ErrorKind::Http,
            WhapiError::Serialization(_) => ErrorKind::Serialization,
            WhapiError::Deserialization(_) => ErrorKind::Deserialization,
        }
    }

    /// HTTP-like status code: 400 for bad requests, the response status for
    /// `Http`, nothing otherwise.
    pub fn code(&self) -> Option<u16> {
        match self {
            WhapiError::Validation(app) => app.code,
            WhapiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.kind() == ErrorKind::BadRequest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_fixes_code_title_and_type() {
        let err = AppError::bad_request("subject is required", None);
        assert_eq!(err.code, Some(400));
        assert_eq!(err.title, "Error");
        assert_eq!(err.kind.as_str(), "BAD_REQUEST");
        assert_eq!(err.locale, "en");
        assert_eq!(err.to_string(), "Error: subject is required");
    }

    #[test]
    fn bad_request_keeps_explicit_locale() {
        let err = AppError::bad_request("Token is required!", Some("es"));
        assert_eq!(err.locale, "es");
    }

    #[test]
    fn generic_app_error_has_no_code() {
        let err = AppError::new("boom", "Oops", ErrorKind::Http, "en");
        assert_eq!(err.code, None);
    }

    #[test]
    fn whapi_error_reports_kind_and_code() {
        let err = WhapiError::bad_request("subject is required");
        assert!(err.is_bad_request());
        assert_eq!(err.code(), Some(400));
        assert_eq!(err.to_string(), "Error: subject is required");

        let err = WhapiError::Http {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.code(), Some(401));

        let err = WhapiError::Deserialization("eof".to_string());
        assert_eq!(err.kind(), ErrorKind::Deserialization);
        assert_eq!(err.code(), None);
    }

    #[test]
    fn transport_error_exposes_original_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = WhapiError::Transport(Box::new(io));
        assert_eq!(err.kind(), ErrorKind::Transport);
        let source = err.source().unwrap();
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused);
    }
}
