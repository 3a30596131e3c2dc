/// Task endpoints
///
/// CRUD operations for tasks, the completion toggle, and the
/// completion-state filter listings.
///
/// # Endpoints
///
/// - `POST /api/tasks/` - Create task
/// - `GET /api/tasks/` - List tasks (paginated)
/// - `GET /api/tasks/{id}/` - Fetch task
/// - `PUT/PATCH /api/tasks/{id}/` - Update task (partial)
/// - `DELETE /api/tasks/{id}/` - Delete task
/// - `POST /api/tasks/{id}/toggle_completion/` - Flip completion flag
/// - `GET /api/tasks/completed/?user_id=` - List completed tasks
/// - `GET /api/tasks/pending/?user_id=` - List pending tasks

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
use taskboard_shared::{
    models::{
        task::{CreateTask, Task, UpdateTask},
        user::User,
    },
    validation::normalize_title,
};

/// Create task request
///
/// The owning user's ID arrives under the key `"user"`, matching the
/// task JSON projection.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title (trimmed and validated non-empty before any store call)
    pub title: String,

    /// Optional description (stored as empty string when omitted)
    pub description: Option<String>,

    /// ID of the owning user
    #[serde(rename = "user")]
    pub user: i64,
}

/// Update task request
///
/// Both PUT and PATCH accept this partial payload; unknown JSON fields
/// are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    /// New title (trimmed and validated non-empty if supplied)
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New completion flag
    pub is_completed: Option<bool>,
}

/// Query filter for the completed/pending listings
#[derive(Debug, Default, Deserialize)]
pub struct CompletionFilter {
    /// Optional owning-user filter
    pub user_id: Option<i64>,
}

/// Create a new task
///
/// The title is normalized and validated before the user-existence check,
/// and the user's existence is checked before the insert.
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks/
/// Content-Type: application/json
///
/// {
///   "title": "Write report",
///   "description": "Quarterly numbers",
///   "user": 1
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Empty or whitespace-only title
/// - `404 Not Found`: Owning user does not exist
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let title = normalize_title(&req.title)
        .map_err(|e| ApiError::validation("title", e.to_string()))?;

    if !User::exists(&state.db, req.user).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let task = Task::create(
        &state.db,
        CreateTask {
            title,
            description: req.description.unwrap_or_default(),
            user_id: req.user,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// List tasks, newest-first, in a paginated envelope
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<Task>>> {
    let count = Task::count(&state.db).await?;
    let tasks = Task::list(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(Page::new(count, &params, tasks)))
}

/// Fetch a single task by ID
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Update a task (partial; shared by PUT and PATCH)
///
/// # Errors
///
/// - `400 Bad Request`: Supplied title is empty after trimming
/// - `404 Not Found`: No task with this ID
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let title = match req.title {
        Some(raw) => Some(
            normalize_title(&raw).map_err(|e| ApiError::validation("title", e.to_string()))?,
        ),
        None => None,
    };

    let task = Task::update(
        &state.db,
        id,
        UpdateTask {
            title,
            description: req.description,
            is_completed: req.is_completed,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Flip a task's completion flag
pub async fn toggle_completion(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = Task::toggle_completion(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Delete a task
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let deleted = Task::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List completed tasks, optionally filtered to one user
pub async fn list_completed(
    State(state): State<AppState>,
    Query(filter): Query<CompletionFilter>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_by_completion(&state.db, true, filter.user_id).await?;

    Ok(Json(tasks))
}

/// List pending tasks, optionally filtered to one user
pub async fn list_pending(
    State(state): State<AppState>,
    Query(filter): Query<CompletionFilter>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_by_completion(&state.db, false, filter.user_id).await?;

    Ok(Json(tasks))
}
