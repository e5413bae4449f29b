// HTTP handlers for modules and lesson uploads

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::curriculum::models::{CourseModule, CreateModuleRequest, Lesson, UploadLessonRequest};
use crate::error::ApiError;
use crate::AppState;

fn course_not_found(course_id: Uuid) -> ApiError {
    ApiError::NotFound {
        resource: "Course".to_string(),
        id: course_id.to_string(),
    }
}

/// POST /api/courses/:id/modules
pub async fn add_module(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(request): Json<CreateModuleRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    request.validate()?;

    if !state.curriculum.course_exists(course_id).await? {
        return Err(course_not_found(course_id));
    }

    let module = state
        .curriculum
        .add_module(course_id, &request.title, &request.description)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Module added successfully", "module": module })),
    ))
}

/// GET /api/courses/:id/modules
pub async fn list_modules(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<CourseModule>>, ApiError> {
    let modules = state.curriculum.list_modules(course_id).await?;
    Ok(Json(modules))
}

/// POST /api/courses/:id/modules/:mid/lessons
pub async fn upload_lesson(
    State(state): State<AppState>,
    Path((course_id, module_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UploadLessonRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    tracing::debug!(
        "Uploading lesson '{}' to course {} module {}",
        request.title,
        course_id,
        module_id
    );
    request.validate()?;

    if !state.curriculum.module_in_course(module_id, course_id).await? {
        return Err(ApiError::NotFound {
            resource: "Module".to_string(),
            id: module_id.to_string(),
        });
    }

    let lesson = state
        .curriculum
        .create_lesson(
            course_id,
            module_id,
            &request.title,
            &request.content_type,
            &request.file_data,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Lesson uploaded successfully", "lesson": lesson })),
    ))
}

/// GET /api/courses/:id/lessons
pub async fn list_lessons(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<Lesson>>, ApiError> {
    let lessons = state.curriculum.list_lessons(course_id).await?;
    Ok(Json(lessons))
}
