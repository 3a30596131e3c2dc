/// User endpoints
///
/// CRUD operations for users plus the per-user task listing.
///
/// # Endpoints
///
/// - `POST /api/users/` - Create user
/// - `GET /api/users/` - List users (paginated)
/// - `GET /api/users/{id}/` - Fetch user
/// - `PUT/PATCH /api/users/{id}/` - Update user (partial)
/// - `DELETE /api/users/{id}/` - Delete user (cascades to tasks)
/// - `GET /api/users/{id}/tasks/` - List the user's tasks

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::Json,
    routes::pagination::{Page, PageParams},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use taskboard_shared::models::{
    task::Task,
    user::{CreateUser, UpdateUser, User},
};
use validator::Validate;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Email address (must be unique)
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Update user request
///
/// Both PUT and PATCH accept this partial payload; unknown JSON fields
/// are ignored.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    /// New email address
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Create a new user
///
/// # Endpoint
///
/// ```text
/// POST /api/users/
/// Content-Type: application/json
///
/// {
///   "name": "John Doe",
///   "email": "john.doe@example.com"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed or email already exists
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    req.validate()?;

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// List users, newest-created-first, in a paginated envelope
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<User>>> {
    let count = User::count(&state.db).await?;
    let users = User::list(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(Page::new(count, &params, users)))
}

/// Fetch a single user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Update a user (partial; shared by PUT and PATCH)
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    req.validate()?;

    let user = User::update(
        &state.db,
        id,
        UpdateUser {
            name: req.name,
            email: req.email,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Delete a user and all tasks they own
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let deleted = User::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List every task owned by a user, newest-first
///
/// Returns a plain array; an unknown user yields an empty array.
pub async fn list_user_tasks(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_by_user(&state.db, id).await?;

    Ok(Json(tasks))
}
