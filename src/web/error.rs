use axum::{
    Json,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use serde_json::json;
use thiserror::Error;

use super::models::ErrorResponse;
use crate::assets::AssetError;
use crate::site::{NOT_FOUND_PAGE, SiteError};

#[derive(Debug, Error)]
pub enum WebError {
    #[error("page not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Site(#[from] SiteError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Site(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            WebError::Asset(AssetError::NotFound(_) | AssetError::InvalidPath(_)) => {
                StatusCode::NOT_FOUND
            }
            WebError::Asset(AssetError::External(_)) => StatusCode::BAD_REQUEST,
            WebError::Site(_) | WebError::Asset(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.status_code() {
            StatusCode::NOT_FOUND => "NOT_FOUND",
            StatusCode::BAD_REQUEST => "BAD_REQUEST",
            _ => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(error = %self, "Not found");
            return (status, Html(NOT_FOUND_PAGE)).into_response();
        }

        tracing::error!(error = %self, "Request failed");
        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        };
        (
            status,
            [(header::CACHE_CONTROL, "no-store")],
            Json(json!(body)),
        )
            .into_response()
    }
}
