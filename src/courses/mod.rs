pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::CourseError;
pub use models::{Course, LiveSession};
pub use repository::CourseRepository;
pub use service::CourseService;
