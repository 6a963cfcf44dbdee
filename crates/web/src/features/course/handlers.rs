use axum::{
    Json,
    extract::Path,
    response::{IntoResponse, Response},
};
use storage::{dto::course::CourseSideResponse, models::CourseSide};

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/course",
    responses(
        (status = 200, description = "Both nines", body = Vec<CourseSideResponse>)
    ),
    tag = "course"
)]
pub async fn get_course() -> Result<Response, WebError> {
    let sides: Vec<CourseSideResponse> = [CourseSide::Front9, CourseSide::Back9]
        .into_iter()
        .map(CourseSideResponse::from)
        .collect();

    Ok(Json(sides).into_response())
}

#[utoipa::path(
    get,
    path = "/api/course/{side}",
    params(
        ("side" = CourseSide, Path, description = "front9 or back9")
    ),
    responses(
        (status = 200, description = "Holes for one side", body = CourseSideResponse),
        (status = 400, description = "Unknown side")
    ),
    tag = "course"
)]
pub async fn get_course_side(Path(side): Path<CourseSide>) -> Result<Response, WebError> {
    Ok(Json(CourseSideResponse::from(side)).into_response())
}
