use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::player::{CreatePlayerRequest, UpdatePlayerRequest},
    models::{Player, Score},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/players",
    responses(
        (status = 200, description = "All registered players", body = Vec<Player>)
    ),
    tag = "players"
)]
pub async fn list_players(State(db): State<Database>) -> Result<Response, WebError> {
    let players = services::list_players(&db).await;

    Ok(Json(players).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{player_id}",
    params(
        ("player_id" = Uuid, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player found", body = Player),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player(
    State(db): State<Database>,
    Path(player_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let player = services::get_player(&db, player_id).await?;

    Ok(Json(player).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{player_id}/scores",
    params(
        ("player_id" = Uuid, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player's scores, oldest first", body = Vec<Score>),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn list_player_scores(
    State(db): State<Database>,
    Path(player_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let scores = services::list_player_scores(&db, player_id).await?;

    Ok(Json(scores).into_response())
}

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player registered", body = Player),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "players"
)]
pub async fn create_player(
    State(db): State<Database>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let player = services::create_player(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(player)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/players/{player_id}",
    params(
        ("player_id" = Uuid, Path, description = "Player ID")
    ),
    request_body = UpdatePlayerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Player updated", body = Player),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn update_player(
    State(db): State<Database>,
    Path(player_id): Path<Uuid>,
    Json(update_req): Json<UpdatePlayerRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_player(&db, player_id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/players/{player_id}",
    params(
        ("player_id" = Uuid, Path, description = "Player ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Player deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found"),
        (status = 409, description = "Player has scores or game entries")
    ),
    tag = "players"
)]
pub async fn delete_player(
    State(db): State<Database>,
    Path(player_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_player(&db, player_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
