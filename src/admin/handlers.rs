// HTTP handlers for the admin reporting surface.
// Every route here sits behind the admin middleware in the router.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use validator::Validate;

use crate::admin::models::{
    DropoutStat, PerformanceInsight, SendNotificationRequest, Transaction, UserActivity,
};
use crate::error::ApiError;
use crate::AppState;

/// GET /api/admin/user-activity
pub async fn user_activity(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserActivity>>, ApiError> {
    let report = state.admin.user_activity().await?;
    Ok(Json(report))
}

/// GET /api/admin/enrollment-dropout
pub async fn enrollment_dropout(
    State(state): State<AppState>,
) -> Result<Json<Vec<DropoutStat>>, ApiError> {
    let report = state.admin.enrollment_dropout().await?;
    Ok(Json(report))
}

/// GET /api/admin/revenue-reports
pub async fn revenue_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = state.admin.revenue_transactions().await?;
    Ok(Json(transactions))
}

/// GET /api/admin/performance-insights
pub async fn performance_insights(
    State(state): State<AppState>,
) -> Result<Json<Vec<PerformanceInsight>>, ApiError> {
    let report = state.admin.performance_insights().await?;
    Ok(Json(report))
}

/// POST /api/admin/send-notification
pub async fn send_notification(
    State(state): State<AppState>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<Json<Value>, ApiError> {
    request.validate()?;

    let notification = state
        .admin
        .record_broadcast(&request.title, &request.message)
        .await?;

    Ok(Json(json!({
        "message": format!("Notification sent: {}", notification.title),
        "notification": notification,
    })))
}
