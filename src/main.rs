mod admin;
mod assessments;
mod auth;
mod config;
mod courses;
mod curriculum;
mod db;
mod discussions;
mod error;
mod validation;

use axum::{
    extract::FromRef,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::timeout::TimeoutLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use admin::AdminRepository;
use assessments::AssessmentRepository;
use auth::{
    models::{
        DeleteProfileResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
        Role, UpdateProfileRequest, UpdateProfileResponse, UserResponse,
    },
    require_admin, AuthService, PasswordHasher, TokenService, UserRepository,
};
use config::AppConfig;
use courses::{CourseRepository, CourseService};
use curriculum::CurriculumRepository;
use db::DbPool;
use discussions::DiscussionRepository;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::get_profile,
        auth::handlers::update_profile,
        auth::handlers::delete_profile,
    ),
    components(
        schemas(
            Role,
            UserResponse,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            UpdateProfileRequest,
            UpdateProfileResponse,
            DeleteProfileResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Registration, login, and profile management")
    ),
    info(
        title = "LMS API",
        version = "1.0.0",
        description = "RESTful API for course management, enrollment, and learning content"
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
    pub tokens: TokenService,
    pub auth: AuthService,
    pub courses: CourseService,
    pub course_repo: CourseRepository,
    pub curriculum: CurriculumRepository,
    pub assessments: AssessmentRepository,
    pub discussions: DiscussionRepository,
    pub admin: AdminRepository,
}

impl AppState {
    /// Wire every service and repository off one pool and one config.
    pub fn new(db: DbPool, config: AppConfig) -> Self {
        let tokens = TokenService::new(
            config.auth.jwt_secret.clone(),
            config.auth.token_ttl_secs,
        );
        let users = UserRepository::new(db.clone());
        let auth = AuthService::new(
            users,
            PasswordHasher::default(),
            tokens.clone(),
            config.auth.clone(),
        );
        let course_repo = CourseRepository::new(db.clone());
        let courses = CourseService::new(course_repo.clone());

        Self {
            tokens,
            auth,
            courses,
            course_repo,
            curriculum: CurriculumRepository::new(db.clone()),
            assessments: AssessmentRepository::new(db.clone()),
            discussions: DiscussionRepository::new(db.clone()),
            admin: AdminRepository::new(db.clone()),
            db,
            config,
        }
    }
}

// Lets the auth extractor pull the token service straight out of AppState
impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

/// Handler for GET /
async fn health() -> &'static str {
    "Server is running!"
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS and timeout middleware
fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout = TimeoutLayer::new(state.config.request_timeout);

    // Everything under /api/admin requires a valid token carrying the Admin role
    let admin_routes = Router::new()
        .route("/api/admin/user-activity", get(admin::handlers::user_activity))
        .route(
            "/api/admin/enrollment-dropout",
            get(admin::handlers::enrollment_dropout),
        )
        .route(
            "/api/admin/revenue-reports",
            get(admin::handlers::revenue_reports),
        )
        .route(
            "/api/admin/performance-insights",
            get(admin::handlers::performance_insights),
        )
        .route(
            "/api/admin/send-notification",
            post(admin::handlers::send_notification),
        )
        .route_layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            require_admin,
        ));

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Health check
        .route("/", get(health))
        // Users
        .route("/api/users/register", post(auth::handlers::register))
        .route("/api/users/login", post(auth::handlers::login))
        .route("/api/users/profile", get(auth::handlers::get_profile))
        .route("/api/users/profile", put(auth::handlers::update_profile))
        .route("/api/users/profile", delete(auth::handlers::delete_profile))
        // Course catalog
        .route("/api/courses", post(courses::handlers::create_course))
        .route("/api/courses", get(courses::handlers::list_courses))
        .route(
            "/api/courses/category/:category",
            get(courses::handlers::courses_by_category),
        )
        .route("/api/courses/:id", get(courses::handlers::get_course))
        .route("/api/courses/:id", put(courses::handlers::update_course))
        .route(
            "/api/courses/:id/assign-instructor",
            put(courses::handlers::assign_instructor),
        )
        // Enrollment and live sessions
        .route("/api/courses/:id/enroll", post(courses::handlers::enroll))
        .route(
            "/api/courses/:id/live-sessions",
            post(courses::handlers::create_live_session),
        )
        .route(
            "/api/courses/:id/live-sessions",
            get(courses::handlers::list_live_sessions),
        )
        // Curriculum
        .route(
            "/api/courses/:id/modules",
            post(curriculum::handlers::add_module),
        )
        .route(
            "/api/courses/:id/modules",
            get(curriculum::handlers::list_modules),
        )
        .route(
            "/api/courses/:id/modules/:mid/lessons",
            post(curriculum::handlers::upload_lesson),
        )
        .route(
            "/api/courses/:id/lessons",
            get(curriculum::handlers::list_lessons),
        )
        // Assessments
        .route(
            "/api/courses/:id/quizzes",
            post(assessments::handlers::create_quiz),
        )
        .route(
            "/api/courses/:id/quizzes",
            get(assessments::handlers::list_quizzes),
        )
        .route(
            "/api/courses/:id/assignments",
            post(assessments::handlers::create_assignment),
        )
        .route(
            "/api/courses/:id/assignments",
            get(assessments::handlers::list_assignments),
        )
        // Discussions
        .route(
            "/api/courses/:id/discussions",
            post(discussions::handlers::post_discussion),
        )
        .route(
            "/api/courses/:id/discussions",
            get(discussions::handlers::list_discussions),
        )
        .merge(admin_routes)
        .layer(cors)
        .layer(timeout)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("LMS API - Starting...");

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let addr = format!("{}:{}", config.host, config.port);
    let app = create_router(AppState::new(db_pool, config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("LMS API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

#[cfg(test)]
mod tests;
