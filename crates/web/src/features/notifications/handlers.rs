use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::notification::NotificationFilter, models::Notification};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/notifications",
    params(NotificationFilter),
    responses(
        (status = 200, description = "Notification feed, newest first", body = Vec<Notification>)
    ),
    tag = "notifications"
)]
pub async fn list_notifications(
    State(db): State<Database>,
    Query(filter): Query<NotificationFilter>,
) -> Result<Response, WebError> {
    let notifications = services::list_notifications(&db, filter.unread_only).await;

    Ok(Json(notifications).into_response())
}

#[utoipa::path(
    post,
    path = "/api/notifications/{notification_id}/read",
    params(
        ("notification_id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = Notification),
        (status = 404, description = "Notification not found")
    ),
    tag = "notifications"
)]
pub async fn mark_notification_read(
    State(db): State<Database>,
    Path(notification_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let notification = services::mark_read(&db, notification_id).await?;

    Ok(Json(notification).into_response())
}
