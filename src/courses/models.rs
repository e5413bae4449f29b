// Course catalog models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Course database model
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration: String,
    /// Course ids a student must have completed before enrolling
    pub prerequisites: Vec<Uuid>,
    pub instructor: Option<Uuid>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Live session scheduled under a course
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LiveSession {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub instructor: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,
    #[serde(default)]
    pub prerequisites: Vec<Uuid>,
    pub instructor: Option<Uuid>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
}

/// Partial update: any subset of the create fields
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub prerequisites: Option<Vec<Uuid>>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssignInstructorRequest {
    pub instructor_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLiveSessionRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub instructor: Option<Uuid>,
}
