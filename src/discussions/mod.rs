pub mod handlers;
pub mod models;
pub mod repository;

pub use models::Discussion;
pub use repository::DiscussionRepository;
