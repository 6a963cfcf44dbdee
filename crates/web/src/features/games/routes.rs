use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_game, delete_game, get_game, get_game_leaderboard, list_games, update_game,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_game))
        .route("/:game_id", put(update_game))
        .route("/:game_id", delete(delete_game))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_games))
        .route("/:game_id", get(get_game))
        .route("/:game_id/leaderboard", get(get_game_leaderboard))
        .merge(protected)
}
