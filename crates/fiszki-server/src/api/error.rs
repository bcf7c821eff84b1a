use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fiszki_core::{ErrorKind, ExtractionError};
use fiszki_types::ErrorBody;

/// Every failure a handler can return
#[derive(Debug)]
pub enum AppError {
    /// Request could not be decoded
    BadRequest(String),
    Extraction(ExtractionError),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::Extraction(err)
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::NoteNotFound => StatusCode::NOT_FOUND,
        ErrorKind::StoreError | ErrorKind::ProviderError => StatusCode::BAD_GATEWAY,
        ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorKind::EmptyResponse | ErrorKind::UnparsableResponse | ErrorKind::MalformedJson => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(details) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: ExtractionError::InvalidInput.to_string(),
                    kind: ErrorKind::InvalidInput.as_str().to_string(),
                    details: Some(details),
                },
            ),
            AppError::Extraction(err) => (
                status_for(err.kind()),
                ErrorBody {
                    error: err.message(),
                    kind: err.kind().as_str().to_string(),
                    details: err.details(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
