// SQL for quizzes, quiz questions, and assignments

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::assessments::models::{
    Assignment, CreateQuizRequest, Quiz, QuizQuestion, QuizWithQuestions,
};
use crate::error::ApiError;

#[derive(Clone)]
pub struct AssessmentRepository {
    pool: PgPool,
}

impl AssessmentRepository {
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

    /// Insert the quiz and all its questions in one transaction, so a failed
    /// question insert never leaves a question-less quiz behind.
    pub async fn create_quiz(
        &self,
        course_id: Uuid,
        request: &CreateQuizRequest,
    ) -> Result<QuizWithQuestions, ApiError> {
        let mut tx = self.pool.begin().await?;

        let quiz = sqlx::query_as::<_, Quiz>(
            "INSERT INTO quizzes (course_id, title) VALUES ($1, $2) \
             RETURNING id, course_id, title",
        )
        .bind(course_id)
        .bind(&request.title)
        .fetch_one(&mut *tx)
        .await?;

        let mut questions = Vec::with_capacity(request.questions.len());
        for input in &request.questions {
            let question = sqlx::query_as::<_, QuizQuestion>(
                "INSERT INTO quiz_questions (quiz_id, question, options, answer) \
                 VALUES ($1, $2, $3, $4) RETURNING id, quiz_id, question, options, answer",
            )
            .bind(quiz.id)
            .bind(&input.question)
            .bind(&input.options)
            .bind(&input.answer)
            .fetch_one(&mut *tx)
            .await?;
            questions.push(question);
        }

        tx.commit().await?;

        Ok(QuizWithQuestions {
            id: quiz.id,
            course_id: quiz.course_id,
            title: quiz.title,
            questions,
        })
    }

    pub async fn list_quizzes(&self, course_id: Uuid) -> Result<Vec<QuizWithQuestions>, ApiError> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            "SELECT id, course_id, title FROM quizzes WHERE course_id = $1 ORDER BY title",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::with_capacity(quizzes.len());
        for quiz in quizzes {
            let questions = sqlx::query_as::<_, QuizQuestion>(
                "SELECT id, quiz_id, question, options, answer \
                 FROM quiz_questions WHERE quiz_id = $1",
            )
            .bind(quiz.id)
            .fetch_all(&self.pool)
            .await?;

            result.push(QuizWithQuestions {
                id: quiz.id,
                course_id: quiz.course_id,
                title: quiz.title,
                questions,
            });
        }

        Ok(result)
    }

    pub async fn create_assignment(
        &self,
        course_id: Uuid,
        title: &str,
        description: &str,
        due_date: DateTime<Utc>,
    ) -> Result<Assignment, ApiError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            "INSERT INTO assignments (course_id, title, description, due_date) \
             VALUES ($1, $2, $3, $4) RETURNING id, course_id, title, description, due_date",
        )
        .bind(course_id)
        .bind(title)
        .bind(description)
        .bind(due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(assignment)
    }

    pub async fn list_assignments(&self, course_id: Uuid) -> Result<Vec<Assignment>, ApiError> {
        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT id, course_id, title, description, due_date \
             FROM assignments WHERE course_id = $1 ORDER BY due_date",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }
}
