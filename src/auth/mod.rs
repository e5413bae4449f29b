// Authentication module
// JWT-based identity: registration, login, and the profile lifecycle,
// plus the auth gate used by protected routes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

pub use error::AuthError;
pub use middleware::{require_admin, AuthenticatedUser};
pub use models::{Role, User, UserResponse};
pub use password::PasswordHasher;
pub use repository::UserRepository;
pub use service::AuthService;
pub use token::TokenService;
