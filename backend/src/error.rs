use crate::game::{GameError, GameId};
use crate::messages::ErrorResponse;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

#[derive(Debug)]
pub enum ApiError {
    Game(GameError),
    Validation(String),
}

impl From<GameError> for ApiError {
    fn from(error: GameError) -> Self {
        ApiError::Game(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Game(GameError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Game(GameError::AlreadyJoined(_)) => StatusCode::CONFLICT,
            ApiError::Game(GameError::NotJoinable(_) | GameError::NotReadyForMoves(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn game_id(&self) -> Option<GameId> {
        match self {
            ApiError::Game(err) => Some(err.game_id()),
            ApiError::Validation(_) => None,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Game(err) => err.to_string(),
            ApiError::Validation(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        warn!(%status, game_id = ?self.game_id(), reason = %message, "Request rejected");
        (status, Json(ErrorResponse { message })).into_response()
    }
}
