// SQL for course modules and lessons

use sqlx::PgPool;
use uuid::Uuid;

use crate::curriculum::models::{CourseModule, Lesson};
use crate::error::ApiError;

#[derive(Clone)]
pub struct CurriculumRepository {
    pool: PgPool,
}

impl CurriculumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn course_exists(&self, course_id: Uuid) -> Result<bool, ApiError> {
        let exists: Option<bool> =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
                .bind(course_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.unwrap_or(false))
    }

    /// True when the module exists and belongs to the given course
    pub async fn module_in_course(&self, module_id: Uuid, course_id: Uuid) -> Result<bool, ApiError> {
        let exists: Option<bool> = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM course_modules WHERE id = $1 AND course_id = $2)",
        )
        .bind(module_id)
        .bind(course_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.unwrap_or(false))
    }

    pub async fn add_module(
        &self,
        course_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<CourseModule, ApiError> {
        let module = sqlx::query_as::<_, CourseModule>(
            "INSERT INTO course_modules (course_id, title, description) \
             VALUES ($1, $2, $3) RETURNING id, course_id, title, description",
        )
        .bind(course_id)
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(module)
    }

    pub async fn list_modules(&self, course_id: Uuid) -> Result<Vec<CourseModule>, ApiError> {
        let modules = sqlx::query_as::<_, CourseModule>(
            "SELECT id, course_id, title, description \
             FROM course_modules WHERE course_id = $1 ORDER BY created_at",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(modules)
    }

    pub async fn create_lesson(
        &self,
        course_id: Uuid,
        module_id: Uuid,
        title: &str,
        content_type: &str,
        file_data: &str,
    ) -> Result<Lesson, ApiError> {
        let lesson = sqlx::query_as::<_, Lesson>(
            "INSERT INTO lessons (course_id, module_id, title, content_type, file_data) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, course_id, module_id, title, content_type, file_data",
        )
        .bind(course_id)
        .bind(module_id)
        .bind(title)
        .bind(content_type)
        .bind(file_data)
        .fetch_one(&self.pool)
        .await?;

        Ok(lesson)
    }

    pub async fn list_lessons(&self, course_id: Uuid) -> Result<Vec<Lesson>, ApiError> {
        let lessons = sqlx::query_as::<_, Lesson>(
            "SELECT id, course_id, module_id, title, content_type, file_data \
             FROM lessons WHERE course_id = $1 ORDER BY created_at",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lessons)
    }
}
