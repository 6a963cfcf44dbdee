use storage::{
    Database,
    dto::player::{CreatePlayerRequest, UpdatePlayerRequest},
    error::Result,
    models::{Player, Score},
    repository::{PlayerStore, ScoreStore},
};
use uuid::Uuid;

/// List all players
pub async fn list_players(db: &Database) -> Vec<Player> {
    db.read().await.store.list_players()
}

/// Get player by ID
pub async fn get_player(db: &Database, player_id: Uuid) -> Result<Player> {
    db.read().await.store.get_player(player_id)
}

/// Register a new player
pub async fn create_player(db: &Database, request: &CreatePlayerRequest) -> Result<Player> {
    db.write().await.store.create_player(request)
}

/// Update a player
pub async fn update_player(
    db: &Database,
    player_id: Uuid,
    request: &UpdatePlayerRequest,
) -> Result<Player> {
    db.write().await.store.update_player(player_id, request)
}

/// Delete a player
pub async fn delete_player(db: &Database, player_id: Uuid) -> Result<()> {
    db.write().await.store.delete_player(player_id)
}

/// All cards a player has handed in, oldest first
pub async fn list_player_scores(db: &Database, player_id: Uuid) -> Result<Vec<Score>> {
    let data = db.read().await;
    data.store.get_player(player_id)?;
    Ok(data.store.find_scores_by_player(player_id, false))
}
