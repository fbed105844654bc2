use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::messages::ErrorBody;
use crate::tictactoe::GameError;

/// Failures reported to HTTP clients as `{"detail": message}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Game not found")]
    NotFound,
    #[error("Game already finished")]
    GameFinished,
    /// Request body missing or not a valid move
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),
    /// Rejected human move
    #[error(transparent)]
    Game(#[from] GameError),
    /// Automated reply broke a rule other than the game being over
    #[error("Opponent move rejected: {0}")]
    Opponent(#[source] GameError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::GameFinished | ApiError::Game(_) => StatusCode::BAD_REQUEST,
            ApiError::Opponent(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
