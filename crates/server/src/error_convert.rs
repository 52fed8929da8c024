use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Carry an `AppError` through a server function as its JSON form, so the
/// client can recover it with `AppError::from_server_error`.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    match serde_json::to_string(&err) {
        Ok(json) => ServerFnError::new(json),
        Err(_) => ServerFnError::new(err.message),
    }
}

pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// `Result<T, AppError>` to the server function result type.
pub trait ServerFnResultExt<T> {
    fn into_server_fn_result(self) -> Result<T, ServerFnError>;
}

impl<T> ServerFnResultExt<T> for Result<T, AppError> {
    fn into_server_fn_result(self) -> Result<T, ServerFnError> {
        self.map_err(app_error_to_server_fn_error)
    }
}

/// Validation for request DTOs, reported as a `ValidationError`.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
