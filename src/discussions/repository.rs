// SQL for course discussions

use sqlx::PgPool;
use uuid::Uuid;

use crate::discussions::models::Discussion;
use crate::error::ApiError;

#[derive(Clone)]
pub struct DiscussionRepository {
    pool: PgPool,
}

impl DiscussionRepository {
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

    pub async fn post(
        &self,
        course_id: Uuid,
        user_id: Uuid,
        comment: &str,
    ) -> Result<Discussion, ApiError> {
        let discussion = sqlx::query_as::<_, Discussion>(
            "INSERT INTO discussions (course_id, user_id, comment) \
             VALUES ($1, $2, $3) RETURNING id, course_id, user_id, comment, created_at",
        )
        .bind(course_id)
        .bind(user_id)
        .bind(comment)
        .fetch_one(&self.pool)
        .await?;

        Ok(discussion)
    }

    pub async fn list_by_course(&self, course_id: Uuid) -> Result<Vec<Discussion>, ApiError> {
        let discussions = sqlx::query_as::<_, Discussion>(
            "SELECT id, course_id, user_id, comment, created_at \
             FROM discussions WHERE course_id = $1 ORDER BY created_at DESC",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(discussions)
    }
}
