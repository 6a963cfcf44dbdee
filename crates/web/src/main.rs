use std::time::Duration;

use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use features::{course, games, leaderboard, notifications, players, scores};
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        players::handlers::list_players,
        players::handlers::get_player,
        players::handlers::list_player_scores,
        players::handlers::create_player,
        players::handlers::update_player,
        players::handlers::delete_player,
        games::handlers::list_games,
        games::handlers::get_game,
        games::handlers::get_game_leaderboard,
        games::handlers::create_game,
        games::handlers::update_game,
        games::handlers::delete_game,
        scores::handlers::preview_score,
        scores::handlers::save_score,
        scores::handlers::list_game_scores,
        scores::handlers::get_score,
        scores::handlers::verify_score,
        leaderboard::handlers::get_season_leaderboard,
        notifications::handlers::list_notifications,
        notifications::handlers::mark_notification_read,
        course::handlers::get_course,
        course::handlers::get_course_side,
    ),
    components(
        schemas(
            storage::dto::player::CreatePlayerRequest,
            storage::dto::player::UpdatePlayerRequest,
            storage::dto::game::CreateGameRequest,
            storage::dto::game::UpdateGameRequest,
            storage::dto::score::HoleStrokes,
            storage::dto::score::SaveScoreRequest,
            storage::dto::score::ScorePreviewResponse,
            storage::dto::score::VerifyScoreResponse,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::leaderboard::GameLeaderboardEntry,
            storage::dto::common::PaginationMeta,
            storage::dto::course::CourseSideResponse,
            storage::services::handicap::HandicapChange,
            storage::services::stableford::RoundTotals,
            storage::models::Player,
            storage::models::Gender,
            storage::models::TeeColor,
            storage::models::Game,
            storage::models::CourseSide,
            storage::models::HoleInfo,
            storage::models::Yardage,
            storage::models::Score,
            storage::models::HoleScore,
            storage::models::Notification,
            storage::models::NotificationKind,
        )
    ),
    tags(
        (name = "players", description = "Player roster"),
        (name = "games", description = "Scheduled games"),
        (name = "scores", description = "Card entry and verification"),
        (name = "leaderboard", description = "Season standings"),
        (name = "notifications", description = "In-app notification feed"),
        (name = "course", description = "Hole reference data"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

fn app(db: Database, api_keys: ApiKeys) -> Router {
    let api = Router::new()
        .nest("/players", players::routes::routes(api_keys.clone()))
        .nest(
            "/games",
            games::routes::routes(api_keys.clone()).merge(scores::routes::game_routes()),
        )
        .nest("/scores", scores::routes::routes(api_keys))
        .nest("/leaderboard", leaderboard::routes::routes())
        .nest("/notifications", notifications::routes::routes())
        .nest("/course", course::routes::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .nest("/api", api)
        .with_state(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting golf society API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, every admin route will be refused");
    }

    let db = Database::new();

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app(db, api_keys)).await?;

    Ok(())
}
