use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("trip api request failed: {0}")]
    Remote(#[from] reqwest::Error),
    #[error("trip api rejected the request: {0}")]
    RemoteRejected(String),
    #[error("could not decode trip api response: {0}")]
    Decode(String),
    #[error("malformed date: {0:?}")]
    MalformedDate(String),
    #[error("unsupported intent: {0}")]
    UnsupportedIntent(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid application id")]
    InvalidApplicationId,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<quick_xml::DeError> for AppError {
    fn from(err: quick_xml::DeError) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<quick_xml::Error> for AppError {
    fn from(err: quick_xml::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Config(_)
            | AppError::Io(_)
            | AppError::MalformedDate(_)
            | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Remote(_) | AppError::RemoteRejected(_) | AppError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::UnsupportedIntent(_)
            | AppError::BadRequest(_)
            | AppError::InvalidApplicationId => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}
