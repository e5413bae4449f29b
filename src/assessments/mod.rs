pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{Assignment, Quiz, QuizQuestion};
pub use repository::AssessmentRepository;
