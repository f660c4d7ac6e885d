//! Proxy errors and their HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};
use thiserror::Error;

/// Everything that can go wrong while proxying a Places request
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Server configuration error")]
    MissingApiKey,
    #[error("lat and lng are required")]
    MissingCoordinates,
    #[error("name query parameter is required")]
    MissingPhotoName,
    #[error("invalid photo name")]
    InvalidPhotoName,
    /// Places answered with a non-success status; body is passed through
    #[error("Places API returned {status}")]
    Upstream { status: u16, body: Value },
    #[error("Failed to fetch nearby places")]
    NearbyFetch(#[source] reqwest::Error),
    #[error("Failed to fetch photo")]
    PhotoFetch(#[source] reqwest::Error),
    /// Places answered 200 with something that is not a place list
    #[error("Unexpected nearby search response")]
    UnexpectedResponse(#[source] serde_json::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCoordinates | Self::MissingPhotoName | Self::InvalidPhotoName => {
                StatusCode::BAD_REQUEST
            }
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::UnexpectedResponse(_) => StatusCode::BAD_GATEWAY,
            Self::MissingApiKey | Self::NearbyFetch(_) | Self::PhotoFetch(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Upstream { body, .. } => (status, Json(body)).into_response(),
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}
