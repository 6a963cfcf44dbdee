use storage::{
    Database,
    dto::score::{SaveScoreRequest, ScorePreviewResponse, VerifyScoreResponse},
    error::Result,
    models::Score,
    repository::{GameStore, ScoreStore},
    services::scoring,
};
use uuid::Uuid;

/// Points for a card in progress, nothing stored
pub async fn preview_score(
    db: &Database,
    game_id: Uuid,
    request: &SaveScoreRequest,
) -> Result<ScorePreviewResponse> {
    let data = db.read().await;
    scoring::preview_score(&data.store, &data.course, game_id, request)
}

/// Create or overwrite a player's card
pub async fn save_score(db: &Database, game_id: Uuid, request: &SaveScoreRequest) -> Result<Score> {
    let mut guard = db.write().await;
    let data = &mut *guard;
    scoring::save_score(
        &mut data.store,
        &data.course,
        &mut data.notifications,
        game_id,
        request,
    )
}

/// Verify a card, adjusting handicap and game completion
pub async fn verify_score(db: &Database, score_id: Uuid) -> Result<VerifyScoreResponse> {
    let mut guard = db.write().await;
    let data = &mut *guard;
    scoring::verify_score(&mut data.store, &mut data.notifications, score_id)
}

/// Get score by ID
pub async fn get_score(db: &Database, score_id: Uuid) -> Result<Score> {
    db.read().await.store.find_score_by_id(score_id)
}

/// All cards for a game
pub async fn list_game_scores(db: &Database, game_id: Uuid) -> Result<Vec<Score>> {
    let data = db.read().await;
    data.store.get_game(game_id)?;
    Ok(data.store.find_scores_by_game(game_id))
}
