pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{CourseModule, Lesson};
pub use repository::CurriculumRepository;
