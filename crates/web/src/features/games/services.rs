use storage::{
    Database,
    dto::{
        game::{CreateGameRequest, UpdateGameRequest},
        leaderboard::GameLeaderboardEntry,
    },
    error::Result,
    models::Game,
    repository::GameStore,
};
use uuid::Uuid;

/// List all games
pub async fn list_games(db: &Database) -> Vec<Game> {
    db.read().await.store.list_games()
}

/// Get game by ID
pub async fn get_game(db: &Database, game_id: Uuid) -> Result<Game> {
    db.read().await.store.get_game(game_id)
}

/// Schedule a new game
pub async fn create_game(db: &Database, request: &CreateGameRequest) -> Result<Game> {
    db.write().await.store.create_game(request)
}

/// Update a game
pub async fn update_game(db: &Database, game_id: Uuid, request: &UpdateGameRequest) -> Result<Game> {
    db.write().await.store.update_game(game_id, request)
}

/// Delete a game and its scores
pub async fn delete_game(db: &Database, game_id: Uuid) -> Result<()> {
    db.write().await.store.delete_game(game_id)
}

/// Ranked cards for one game
pub async fn game_leaderboard(db: &Database, game_id: Uuid) -> Result<Vec<GameLeaderboardEntry>> {
    db.read().await.store.game_leaderboard(game_id)
}
