// Admin reporting models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::auth::models::Role;

/// One user with their enrolled courses, as shown in the activity report.
/// A projection only: the password hash never appears here.
#[derive(Debug, Serialize)]
pub struct UserActivity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub enrolled_courses: Vec<CourseSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
}

/// Per-course enrollment and dropout figures.
/// dropout_rate = (enrolled - completed) / enrolled, 0 when nobody enrolled.
#[derive(Debug, Serialize)]
pub struct DropoutStat {
    pub course_id: Uuid,
    pub title: String,
    pub enrolled_students: i64,
    pub completions: i64,
    pub dropout_rate: f64,
}

/// Per-course engagement figures for the performance report
#[derive(Debug, Serialize)]
pub struct PerformanceInsight {
    pub course_id: Uuid,
    pub title: String,
    pub enrolled_students: i64,
    pub completions: i64,
    pub completion_rate: f64,
    pub discussions: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_status")]
pub enum TransactionStatus {
    Success,
    Failed,
    Pending,
}

/// Payment record. Read-only in this system; only the revenue report
/// touches the table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub sent_to_all: bool,
    pub user_id: Option<Uuid>,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SendNotificationRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}
