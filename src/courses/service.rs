// Course business logic: instructor assignment and enrollment rules

use uuid::Uuid;

use crate::auth::models::Role;
use crate::courses::{error::CourseError, models::Course, repository::CourseRepository};

#[derive(Clone)]
pub struct CourseService {
    repository: CourseRepository,
}

impl CourseService {
    pub fn new(repository: CourseRepository) -> Self {
        Self { repository }
    }

    /// Assign an instructor. The target user must exist and hold the
    /// Instructor or Admin role.
    pub async fn assign_instructor(
        &self,
        course_id: Uuid,
        instructor_id: Uuid,
    ) -> Result<Course, CourseError> {
        let role = self
            .repository
            .user_role(instructor_id)
            .await?
            .ok_or(CourseError::UserNotFound)?;

        if !matches!(role, Role::Instructor | Role::Admin) {
            return Err(CourseError::InstructorRoleRequired);
        }

        self.repository
            .assign_instructor(course_id, instructor_id)
            .await?
            .ok_or(CourseError::NotFound)
    }

    /// Enroll a user in a course. Every prerequisite course id must appear
    /// in the user's completions; otherwise the rejection lists the unmet
    /// ids. A duplicate enrollment surfaces the store conflict.
    pub async fn enroll(&self, course_id: Uuid, user_id: Uuid) -> Result<(), CourseError> {
        let course = self
            .repository
            .find_by_id(course_id)
            .await?
            .ok_or(CourseError::NotFound)?;

        if self.repository.user_role(user_id).await?.is_none() {
            return Err(CourseError::UserNotFound);
        }

        let completed = self.repository.completed_course_ids(user_id).await?;
        let unmet: Vec<Uuid> = course
            .prerequisites
            .iter()
            .filter(|prereq| !completed.contains(prereq))
            .copied()
            .collect();

        if !unmet.is_empty() {
            tracing::debug!(
                "Enrollment blocked for user {} in course {}: {} unmet prerequisites",
                user_id,
                course_id,
                unmet.len()
            );
            return Err(CourseError::PrerequisitesNotMet { unmet });
        }

        self.repository.enroll(user_id, course_id).await?;
        tracing::info!("User {} enrolled in course {}", user_id, course_id);
        Ok(())
    }
}
