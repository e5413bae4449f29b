// Assessment models: quizzes with their questions, and assignments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quiz {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Quiz with its questions, as returned to clients
#[derive(Debug, Serialize)]
pub struct QuizWithQuestions {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct QuestionInput {
    #[validate(length(min = 1, message = "Question text is required"))]
    pub question: String,
    #[validate(length(min = 2, message = "At least two options are required"))]
    pub options: Vec<String>,
    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate]
    pub questions: Vec<QuestionInput>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub due_date: DateTime<Utc>,
}
