// HTTP handlers for quizzes and assignments

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::assessments::models::{
    Assignment, CreateAssignmentRequest, CreateQuizRequest, QuizWithQuestions,
};
use crate::error::ApiError;
use crate::AppState;

fn course_not_found(course_id: Uuid) -> ApiError {
    ApiError::NotFound {
        resource: "Course".to_string(),
        id: course_id.to_string(),
    }
}

/// POST /api/courses/:id/quizzes
pub async fn create_quiz(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(request): Json<CreateQuizRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    request.validate()?;

    if request.questions.is_empty() {
        return Err(ApiError::validation_message(
            "questions",
            "At least one question is required",
        ));
    }

    // Every question's answer must be one of its own options
    for question in &request.questions {
        if !question.options.contains(&question.answer) {
            return Err(ApiError::validation_message(
                "questions",
                "Answer must be one of the question's options",
            ));
        }
    }

    if !state.assessments.course_exists(course_id).await? {
        return Err(course_not_found(course_id));
    }

    let quiz = state.assessments.create_quiz(course_id, &request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Quiz created successfully", "quiz": quiz })),
    ))
}

/// GET /api/courses/:id/quizzes
pub async fn list_quizzes(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<QuizWithQuestions>>, ApiError> {
    let quizzes = state.assessments.list_quizzes(course_id).await?;
    Ok(Json(quizzes))
}

/// POST /api/courses/:id/assignments
pub async fn create_assignment(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(request): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    request.validate()?;

    if !state.assessments.course_exists(course_id).await? {
        return Err(course_not_found(course_id));
    }

    let assignment = state
        .assessments
        .create_assignment(course_id, &request.title, &request.description, request.due_date)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Assignment created successfully",
            "assignment": assignment,
        })),
    ))
}

/// GET /api/courses/:id/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<Assignment>>, ApiError> {
    let assignments = state.assessments.list_assignments(course_id).await?;
    Ok(Json(assignments))
}
