use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_course, get_course_side};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(get_course))
        .route("/:side", get(get_course_side))
}
