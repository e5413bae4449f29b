// SQL for admin reports and notifications

use std::collections::HashMap;

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::admin::models::{
    CourseSummary, DropoutStat, Notification, PerformanceInsight, Transaction, UserActivity,
};
use crate::auth::models::Role;
use crate::error::ApiError;

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    role: Role,
}

#[derive(FromRow)]
struct EnrollmentRow {
    user_id: Uuid,
    course_id: Uuid,
    title: String,
}

#[derive(FromRow)]
struct CourseCountsRow {
    course_id: Uuid,
    title: String,
    enrolled_students: i64,
    completions: i64,
}

#[derive(FromRow)]
struct PerformanceRow {
    course_id: Uuid,
    title: String,
    enrolled_students: i64,
    completions: i64,
    discussions: i64,
}

#[derive(Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every user with the titles of the courses they are enrolled in.
    /// Two queries, joined in memory; no per-user round trips.
    pub async fn user_activity(&self) -> Result<Vec<UserActivity>, ApiError> {
        let users = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role FROM users ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        let enrollments = sqlx::query_as::<_, EnrollmentRow>(
            "SELECT e.user_id, c.id AS course_id, c.title \
             FROM enrollments e JOIN courses c ON c.id = e.course_id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_user: HashMap<Uuid, Vec<CourseSummary>> = HashMap::new();
        for row in enrollments {
            by_user.entry(row.user_id).or_default().push(CourseSummary {
                id: row.course_id,
                title: row.title,
            });
        }

        Ok(users
            .into_iter()
            .map(|user| UserActivity {
                enrolled_courses: by_user.remove(&user.id).unwrap_or_default(),
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role,
            })
            .collect())
    }

    pub async fn enrollment_dropout(&self) -> Result<Vec<DropoutStat>, ApiError> {
        let rows = sqlx::query_as::<_, CourseCountsRow>(
            "SELECT c.id AS course_id, c.title, \
                    (SELECT COUNT(*) FROM enrollments e WHERE e.course_id = c.id) AS enrolled_students, \
                    (SELECT COUNT(*) FROM completions p WHERE p.course_id = c.id) AS completions \
             FROM courses c ORDER BY c.title",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let dropout_rate = if row.enrolled_students > 0 {
                    (row.enrolled_students - row.completions) as f64 / row.enrolled_students as f64
                } else {
                    0.0
                };
                DropoutStat {
                    course_id: row.course_id,
                    title: row.title,
                    enrolled_students: row.enrolled_students,
                    completions: row.completions,
                    dropout_rate,
                }
            })
            .collect())
    }

    pub async fn revenue_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            "SELECT id, user_id, course_id, amount, payment_date, status \
             FROM transactions ORDER BY payment_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    pub async fn performance_insights(&self) -> Result<Vec<PerformanceInsight>, ApiError> {
        let rows = sqlx::query_as::<_, PerformanceRow>(
            "SELECT c.id AS course_id, c.title, \
                    (SELECT COUNT(*) FROM enrollments e WHERE e.course_id = c.id) AS enrolled_students, \
                    (SELECT COUNT(*) FROM completions p WHERE p.course_id = c.id) AS completions, \
                    (SELECT COUNT(*) FROM discussions d WHERE d.course_id = c.id) AS discussions \
             FROM courses c ORDER BY c.title",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let completion_rate = if row.enrolled_students > 0 {
                    row.completions as f64 / row.enrolled_students as f64
                } else {
                    0.0
                };
                PerformanceInsight {
                    course_id: row.course_id,
                    title: row.title,
                    enrolled_students: row.enrolled_students,
                    completions: row.completions,
                    completion_rate,
                    discussions: row.discussions,
                }
            })
            .collect())
    }

    pub async fn record_broadcast(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Notification, ApiError> {
        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (title, message, sent_to_all) \
             VALUES ($1, $2, TRUE) \
             RETURNING id, title, message, sent_to_all, user_id, sent_at",
        )
        .bind(title)
        .bind(message)
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }
}
