use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_player, delete_player, get_player, list_player_scores, list_players, update_player,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:player_id", put(update_player))
        .route("/:player_id", delete(delete_player))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_players))
        .route("/", post(create_player))
        .route("/:player_id", get(get_player))
        .route("/:player_id/scores", get(list_player_scores))
        .merge(protected)
}
