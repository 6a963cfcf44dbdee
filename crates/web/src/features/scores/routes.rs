use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_score, list_game_scores, preview_score, save_score, verify_score};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:score_id/verify", post(verify_score))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:score_id", get(get_score))
        .merge(protected)
}

/// Card entry, mounted under `/games`
pub fn game_routes() -> Router<Database> {
    Router::new()
        .route("/:game_id/scores", get(list_game_scores))
        .route("/:game_id/scores", post(save_score))
        .route("/:game_id/scores/preview", post(preview_score))
}
