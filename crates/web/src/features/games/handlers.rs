use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        game::{CreateGameRequest, UpdateGameRequest},
        leaderboard::GameLeaderboardEntry,
    },
    models::Game,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/games",
    responses(
        (status = 200, description = "All games by date and tee time", body = Vec<Game>)
    ),
    tag = "games"
)]
pub async fn list_games(State(db): State<Database>) -> Result<Response, WebError> {
    let games = services::list_games(&db).await;

    Ok(Json(games).into_response())
}

#[utoipa::path(
    get,
    path = "/api/games/{game_id}",
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game found", body = Game),
        (status = 404, description = "Game not found")
    ),
    tag = "games"
)]
pub async fn get_game(
    State(db): State<Database>,
    Path(game_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let game = services::get_game(&db, game_id).await?;

    Ok(Json(game).into_response())
}

#[utoipa::path(
    get,
    path = "/api/games/{game_id}/leaderboard",
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Cards ranked by points", body = Vec<GameLeaderboardEntry>),
        (status = 404, description = "Game not found")
    ),
    tag = "games"
)]
pub async fn get_game_leaderboard(
    State(db): State<Database>,
    Path(game_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let entries = services::game_leaderboard(&db, game_id).await?;

    Ok(Json(entries).into_response())
}

#[utoipa::path(
    post,
    path = "/api/games",
    request_body = CreateGameRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Game scheduled", body = Game),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Unknown player")
    ),
    tag = "games"
)]
pub async fn create_game(
    State(db): State<Database>,
    Json(req): Json<CreateGameRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let game = services::create_game(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(game)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/games/{game_id}",
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    request_body = UpdateGameRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Game updated", body = Game),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Game not found")
    ),
    tag = "games"
)]
pub async fn update_game(
    State(db): State<Database>,
    Path(game_id): Path<Uuid>,
    Json(update_req): Json<UpdateGameRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_game(&db, game_id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/games/{game_id}",
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Game and its scores deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Game not found")
    ),
    tag = "games"
)]
pub async fn delete_game(
    State(db): State<Database>,
    Path(game_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_game(&db, game_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
