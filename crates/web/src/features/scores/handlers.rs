use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::score::{SaveScoreRequest, ScorePreviewResponse, VerifyScoreResponse},
    models::Score,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/games/{game_id}/scores/preview",
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    request_body = SaveScoreRequest,
    responses(
        (status = 200, description = "Live points for the entered holes", body = ScorePreviewResponse),
        (status = 400, description = "Invalid strokes"),
        (status = 404, description = "Game or player not found")
    ),
    tag = "scores"
)]
pub async fn preview_score(
    State(db): State<Database>,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<SaveScoreRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let preview = services::preview_score(&db, game_id, &payload).await?;

    Ok(Json(preview).into_response())
}

#[utoipa::path(
    post,
    path = "/api/games/{game_id}/scores",
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    request_body = SaveScoreRequest,
    responses(
        (status = 200, description = "Card saved", body = Score),
        (status = 400, description = "Invalid strokes"),
        (status = 404, description = "Game or player not found"),
        (status = 409, description = "Card already verified or player not in game")
    ),
    tag = "scores"
)]
pub async fn save_score(
    State(db): State<Database>,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<SaveScoreRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let score = services::save_score(&db, game_id, &payload).await?;

    Ok(Json(score).into_response())
}

#[utoipa::path(
    get,
    path = "/api/games/{game_id}/scores",
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Cards for the game", body = Vec<Score>),
        (status = 404, description = "Game not found")
    ),
    tag = "scores"
)]
pub async fn list_game_scores(
    State(db): State<Database>,
    Path(game_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let scores = services::list_game_scores(&db, game_id).await?;

    Ok(Json(scores).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scores/{score_id}",
    params(
        ("score_id" = Uuid, Path, description = "Score ID")
    ),
    responses(
        (status = 200, description = "Score found", body = Score),
        (status = 404, description = "Score not found")
    ),
    tag = "scores"
)]
pub async fn get_score(
    State(db): State<Database>,
    Path(score_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let score = services::get_score(&db, score_id).await?;

    Ok(Json(score).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scores/{score_id}/verify",
    params(
        ("score_id" = Uuid, Path, description = "Score ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Score verified", body = VerifyScoreResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Score not found"),
        (status = 409, description = "Score already verified")
    ),
    tag = "scores"
)]
pub async fn verify_score(
    State(db): State<Database>,
    Path(score_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let outcome = services::verify_score(&db, score_id).await?;

    Ok(Json(outcome).into_response())
}
