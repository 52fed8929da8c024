use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What went wrong, independent of the message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    /// Request body failed validation; see `field_errors`.
    ValidationError,
    /// No session, an expired one, or bad credentials.
    Unauthorized,
    /// The backend could not be reached.
    Unavailable,
    InternalError,
}

impl AppErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppErrorKind::ValidationError => "ValidationError",
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Unavailable => "Unavailable",
            AppErrorKind::InternalError => "InternalError",
        }
    }

    /// HTTP status used when the error leaves a REST handler.
    pub fn status_code(&self) -> u16 {
        match self {
            AppErrorKind::ValidationError => 422,
            AppErrorKind::Unauthorized => 401,
            AppErrorKind::Unavailable => 503,
            AppErrorKind::InternalError => 500,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error shared by the server, its REST API and the dashboard.
///
/// Serialized as JSON both in REST error bodies and inside server function
/// errors, so the client can recover the kind and per-field messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(AppErrorKind::ValidationError, message)
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Find an embedded `AppError` in text such as a `ServerFnError`
    /// display string:
    ///
    /// `error running server function: {"kind":"Unauthorized",...} (details: None)`
    pub fn from_server_error(text: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str(text) {
            return Some(err);
        }
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        (end > start)
            .then(|| serde_json::from_str(&text[start..=end]).ok())
            .flatten()
    }

    /// Like [`AppError::from_server_error`], but a failure with no embedded
    /// payload (the request never reached a handler) becomes `Unavailable`.
    pub fn from_server_fn_message(text: &str) -> Self {
        Self::from_server_error(text).unwrap_or_else(|| Self::unavailable(text))
    }

    /// Per-field validation messages embedded in `text`, if any.
    pub fn parse_field_errors(text: &str) -> HashMap<String, String> {
        Self::from_server_error(text)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Message fit to show a user. Unparseable text gets a generic one.
    pub fn friendly_message(text: &str) -> String {
        match Self::from_server_error(text) {
            Some(err) if err.kind == AppErrorKind::Unavailable => {
                "Cannot reach the server. Check your connection.".to_string()
            }
            Some(err) => err.message,
            None => GENERIC_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let first = errs.first()?;
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                Some((field.to_string(), message))
            })
            .collect();
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.kind.status_code())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}
