use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{list_notifications, mark_notification_read};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/:notification_id/read", post(mark_notification_read))
}
