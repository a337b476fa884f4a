use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum AppError {
    StorageError { msg: String },
    ObjectIdError { msg: String },
    ValidationError { msg: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::StorageError { msg } => write!(f, "Storage Error: '{}'", msg),
            AppError::ObjectIdError { msg } => write!(f, "string to object ID Error: '{}'", msg),
            AppError::ValidationError { msg } => write!(f, "Validation Error: '{}'", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError { .. } | AppError::ObjectIdError { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::StorageError { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

// A body that does not fit the model (i.g., a negative age) is invalid input like any other.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError {
            msg: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_string();

        (status, body).into_response()
    }
}
