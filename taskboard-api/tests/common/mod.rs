/// Common test utilities for integration tests
///
/// These tests run against a live PostgreSQL database; point `DATABASE_URL`
/// at a disposable database. Each test creates its own users (unique
/// emails) and deletes them at the end, so tests can run in parallel
/// against shared state.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::PgPool;
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::Config;
use tower::ServiceExt;
use uuid::Uuid;

/// Test context holding the database pool and the full router
pub struct TestContext {
    pub db: PgPool,
    pub app: Router,
}

impl TestContext {
    /// Connects to the test database, runs migrations, and builds the app
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;

        // Path relative to the taskboard-api Cargo.toml
        sqlx::migrate!("../migrations").run(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Creates a user via the API and returns its JSON representation
    pub async fn create_user(&self, name: &str) -> Value {
        let (status, body) = request(
            &self.app,
            "POST",
            "/api/users/",
            Some(json!({ "name": name, "email": unique_email(name) })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "create_user failed: {body}");
        body
    }

    /// Creates a task via the API and returns its JSON representation
    pub async fn create_task(&self, user_id: i64, title: &str) -> Value {
        let (status, body) = request(
            &self.app,
            "POST",
            "/api/tasks/",
            Some(json!({ "title": title, "user": user_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "create_task failed: {body}");
        body
    }

    /// Deletes a user (and, by cascade, their tasks); ignores missing users
    pub async fn cleanup_user(&self, user_id: i64) {
        let _ = request(&self.app, "DELETE", &format!("/api/users/{user_id}/"), None).await;
    }
}

/// Generates an email no other test run will have used
pub fn unique_email(prefix: &str) -> String {
    let slug: String = prefix
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!("{}-{}@example.com", slug.to_lowercase(), Uuid::new_v4())
}

/// Sends a request through the router and returns status plus parsed body
///
/// Empty bodies (e.g. 204 responses) come back as `Value::Null`.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}
