// HTTP handlers for course discussions

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::discussions::models::{Discussion, PostDiscussionRequest};
use crate::error::ApiError;
use crate::AppState;

/// POST /api/courses/:id/discussions
pub async fn post_discussion(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(request): Json<PostDiscussionRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    request.validate()?;

    if !state.discussions.course_exists(course_id).await? {
        return Err(ApiError::NotFound {
            resource: "Course".to_string(),
            id: course_id.to_string(),
        });
    }

    let discussion = state
        .discussions
        .post(course_id, request.user_id, &request.comment)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Discussion posted successfully",
            "discussion": discussion,
        })),
    ))
}

/// GET /api/courses/:id/discussions
pub async fn list_discussions(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<Discussion>>, ApiError> {
    let discussions = state.discussions.list_by_course(course_id).await?;
    Ok(Json(discussions))
}
