// SQL for courses, live sessions, and the enrollment join tables

use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::models::Role;
use crate::courses::{
    error::CourseError,
    models::{Course, CreateCourseRequest, LiveSession, UpdateCourseRequest},
};

const COURSE_COLUMNS: &str =
    "id, title, description, duration, prerequisites, instructor, category, created_at";

#[derive(Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateCourseRequest) -> Result<Course, CourseError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "INSERT INTO courses (title, description, duration, prerequisites, instructor, category) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COURSE_COLUMNS}"
        ))
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.duration)
        .bind(&request.prerequisites)
        .bind(request.instructor)
        .bind(&request.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(course)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, CourseError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    pub async fn list_all(&self) -> Result<Vec<Course>, CourseError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    pub async fn find_by_category(&self, category: &str) -> Result<Vec<Course>, CourseError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE category = $1 ORDER BY created_at"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    /// Partial update, keeping current values for omitted fields.
    /// Returns None when the course does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateCourseRequest,
    ) -> Result<Option<Course>, CourseError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses \
             SET title = COALESCE($1, title), \
                 description = COALESCE($2, description), \
                 duration = COALESCE($3, duration), \
                 prerequisites = COALESCE($4, prerequisites), \
                 category = COALESCE($5, category) \
             WHERE id = $6 RETURNING {COURSE_COLUMNS}"
        ))
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.duration)
        .bind(&request.prerequisites)
        .bind(&request.category)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    pub async fn assign_instructor(
        &self,
        course_id: Uuid,
        instructor_id: Uuid,
    ) -> Result<Option<Course>, CourseError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses SET instructor = $1 WHERE id = $2 RETURNING {COURSE_COLUMNS}"
        ))
        .bind(instructor_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    pub async fn user_role(&self, user_id: Uuid) -> Result<Option<Role>, CourseError> {
        let role: Option<(Role,)> = sqlx::query_as("SELECT role FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role.map(|(r,)| r))
    }

    /// Course ids the user has completed; compared against prerequisites
    /// before enrollment.
    pub async fn completed_course_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, CourseError> {
        let rows: Vec<(Uuid,)> =
            sqlx::query_as("SELECT course_id FROM completions WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Record an enrollment. The (user_id, course_id) primary key turns a
    /// re-enrollment into a unique violation.
    pub async fn enroll(&self, user_id: Uuid, course_id: Uuid) -> Result<(), CourseError> {
        sqlx::query("INSERT INTO enrollments (user_id, course_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(course_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return CourseError::AlreadyEnrolled;
                    }
                }
                CourseError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    pub async fn create_live_session(
        &self,
        course_id: Uuid,
        title: &str,
        starts_at: chrono::DateTime<chrono::Utc>,
        instructor: Option<Uuid>,
    ) -> Result<LiveSession, CourseError> {
        let session = sqlx::query_as::<_, LiveSession>(
            "INSERT INTO live_sessions (course_id, title, starts_at, instructor) \
             VALUES ($1, $2, $3, $4) RETURNING id, course_id, title, starts_at, instructor",
        )
        .bind(course_id)
        .bind(title)
        .bind(starts_at)
        .bind(instructor)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    pub async fn list_live_sessions(&self, course_id: Uuid) -> Result<Vec<LiveSession>, CourseError> {
        let sessions = sqlx::query_as::<_, LiveSession>(
            "SELECT id, course_id, title, starts_at, instructor \
             FROM live_sessions WHERE course_id = $1 ORDER BY starts_at",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }
}
