/// Application state and router builder
///
/// This module defines the shared application state and provides a
/// function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::{build_router, AppState}, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// Paths mirror the external interface exactly, trailing slashes included:
///
/// ```text
/// /
/// ├── /health                                  # Health check
/// └── /api/
///     ├── /users/                              # POST create, GET paginated list
///     ├── /users/:id/                          # GET, PUT/PATCH (partial), DELETE
///     ├── /users/:id/tasks/                    # GET user's tasks (array)
///     ├── /tasks/                              # POST create, GET paginated list
///     ├── /tasks/completed/?user_id=           # GET completed (array)
///     ├── /tasks/pending/?user_id=             # GET pending (array)
///     ├── /tasks/:id/                          # GET, PUT/PATCH (partial), DELETE
///     └── /tasks/:id/toggle_completion/        # POST flip completion
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/users/",
            post(routes::users::create_user).get(routes::users::list_users),
        )
        .route(
            "/api/users/:id/",
            get(routes::users::get_user)
                .put(routes::users::update_user)
                .patch(routes::users::update_user)
                .delete(routes::users::delete_user),
        )
        .route("/api/users/:id/tasks/", get(routes::users::list_user_tasks))
        .route(
            "/api/tasks/",
            post(routes::tasks::create_task).get(routes::tasks::list_tasks),
        )
        // Static segments must be registered alongside the :id matcher
        .route("/api/tasks/completed/", get(routes::tasks::list_completed))
        .route("/api/tasks/pending/", get(routes::tasks::list_pending))
        .route(
            "/api/tasks/:id/",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .patch(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .route(
            "/api/tasks/:id/toggle_completion/",
            post(routes::tasks::toggle_completion),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
