use crate::client::FetchError;
use axum::http::StatusCode;

/// The only failure text ever shown to the user.
pub const FETCH_FAILED_MESSAGE: &str = "Sorry, error fetch data";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }

    pub fn fetch_failed() -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<FetchError> for AppError {
    fn from(_: FetchError) -> Self {
        Self::fetch_failed()
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
