// HTTP handlers for the course catalog, enrollment, and live sessions

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::courses::{
    error::CourseError,
    models::{
        AssignInstructorRequest, Course, CreateCourseRequest, CreateLiveSessionRequest,
        EnrollRequest, LiveSession, UpdateCourseRequest,
    },
};
use crate::AppState;

/// POST /api/courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Value>), CourseError> {
    tracing::debug!("Creating course: {}", request.title);
    request.validate()?;

    let course = state.course_repo.create(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Course created successfully", "course": course })),
    ))
}

/// GET /api/courses
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, CourseError> {
    let courses = state.course_repo.list_all().await?;
    Ok(Json(courses))
}

/// GET /api/courses/:id
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Course>, CourseError> {
    let course = state
        .course_repo
        .find_by_id(course_id)
        .await?
        .ok_or(CourseError::NotFound)?;
    Ok(Json(course))
}

/// PUT /api/courses/:id
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<Json<Value>, CourseError> {
    request.validate()?;

    let course = state
        .course_repo
        .update(course_id, &request)
        .await?
        .ok_or(CourseError::NotFound)?;

    Ok(Json(json!({
        "message": "Course updated successfully",
        "course": course,
    })))
}

/// PUT /api/courses/:id/assign-instructor
pub async fn assign_instructor(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(request): Json<AssignInstructorRequest>,
) -> Result<Json<Value>, CourseError> {
    let course = state
        .courses
        .assign_instructor(course_id, request.instructor_id)
        .await?;

    Ok(Json(json!({
        "message": "Instructor assigned successfully",
        "course": course,
    })))
}

/// GET /api/courses/category/:category
/// An empty result is a 404, matching the rest of the catalog surface.
pub async fn courses_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Value>, CourseError> {
    let courses = state.course_repo.find_by_category(&category).await?;

    if courses.is_empty() {
        return Err(CourseError::CategoryEmpty);
    }

    Ok(Json(json!({ "courses": courses })))
}

/// POST /api/courses/:id/enroll
pub async fn enroll(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(request): Json<EnrollRequest>,
) -> Result<Json<Value>, CourseError> {
    state.courses.enroll(course_id, request.user_id).await?;
    Ok(Json(json!({ "message": "Enrolled successfully" })))
}

/// POST /api/courses/:id/live-sessions
pub async fn create_live_session(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(request): Json<CreateLiveSessionRequest>,
) -> Result<(StatusCode, Json<Value>), CourseError> {
    request.validate()?;

    if state.course_repo.find_by_id(course_id).await?.is_none() {
        return Err(CourseError::NotFound);
    }

    let session = state
        .course_repo
        .create_live_session(course_id, &request.title, request.starts_at, request.instructor)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Live session scheduled successfully",
            "live_session": session,
        })),
    ))
}

/// GET /api/courses/:id/live-sessions
pub async fn list_live_sessions(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<LiveSession>>, CourseError> {
    let sessions = state.course_repo.list_live_sessions(course_id).await?;
    Ok(Json(sessions))
}
