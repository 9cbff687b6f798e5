use crate::AppState;
use crate::error::ApiError;
use crate::game::{GameId, Move};
use crate::messages::{CreateGameRequest, GameResponse, JoinGameRequest, MoveRequest};
use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::{get, patch, post},
};
use tracing::debug;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/rpsgame", post(create_game))
        .route("/api/rpsgame/:id", get(get_game))
        .route("/api/rpsgame/:id/join", patch(join_game))
        .route("/api/rpsgame/:id/move", patch(make_move))
}

fn require_name(name: &str) -> Result<&str, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("Name must not be empty".to_string()));
    }
    Ok(name)
}

async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<Json<GameResponse>, ApiError> {
    let Json(req) = payload?;
    let name = require_name(&req.name)?;

    let game = state.store.create(name);
    Ok(Json(game.into()))
}

async fn join_game(
    State(state): State<AppState>,
    id: Result<Path<GameId>, PathRejection>,
    payload: Result<Json<JoinGameRequest>, JsonRejection>,
) -> Result<Json<GameResponse>, ApiError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let name = require_name(&req.name)?;

    let game = state.store.join(id, name)?;
    Ok(Json(game.into()))
}

async fn make_move(
    State(state): State<AppState>,
    id: Result<Path<GameId>, PathRejection>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameResponse>, ApiError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let name = require_name(&req.name)?;
    let mv = req
        .player_move
        .parse::<Move>()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    debug!(game_id = id, name, %mv, "Move submitted");
    let game = state.store.make_move(id, name, mv)?;
    Ok(Json(game.into()))
}

async fn get_game(
    State(state): State<AppState>,
    id: Result<Path<GameId>, PathRejection>,
) -> Result<Json<GameResponse>, ApiError> {
    let Path(id) = id?;

    let game = state.store.get(id)?;
    Ok(Json(game.into()))
}
