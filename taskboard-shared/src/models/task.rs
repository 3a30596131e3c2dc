/// Task model and database operations
///
/// Tasks carry a title, an optional description, and a completion flag,
/// and are owned by exactly one user. Every query joins the owner so the
/// projection can expose `user_name` and `user_email` alongside the row.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id BIGSERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     description TEXT NOT NULL,
///     is_completed BOOLEAN NOT NULL,
///     user_id BIGINT NOT NULL REFERENCES users (id),
///     created_at TIMESTAMPTZ NOT NULL,
///     updated_at TIMESTAMPTZ NOT NULL
/// );
/// ```
///
/// Titles are expected to be normalized (trimmed, non-empty) before they
/// reach this module; see [`crate::validation::normalize_title`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Projection shared by every task query: the row joined with its owner.
const SELECT_TASK: &str = r#"
SELECT t.id, t.title, t.description, t.is_completed,
       t.user_id, u.name AS user_name, u.email AS user_email,
       t.created_at, t.updated_at
FROM tasks t
JOIN users u ON u.id = t.user_id
"#;

/// Newest-first ordering with an `id` tie-breaker for determinism.
const ORDER_NEWEST_FIRST: &str = " ORDER BY t.created_at DESC, t.id DESC";

/// Task model joined with its owning user
///
/// The owner's ID serializes under the key `"user"`, with `user_name` and
/// `user_email` denormalized from the join.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (store-assigned surrogate key)
    pub id: i64,

    /// Task title (trimmed, never empty)
    pub title: String,

    /// Task description (empty string when not supplied)
    pub description: String,

    /// Completion flag
    pub is_completed: bool,

    /// ID of the owning user
    #[serde(rename = "user")]
    pub user_id: i64,

    /// Owning user's name
    pub user_name: String,

    /// Owning user's email
    pub user_email: String,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
///
/// The title must already be normalized; the owning user must exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Normalized task title
    pub title: String,

    /// Task description (empty string when the payload omitted it)
    pub description: String,

    /// ID of the owning user
    pub user_id: i64,
}

/// Input for updating an existing task
///
/// All fields are optional. Only non-None fields will be updated;
/// `updated_at` is refreshed regardless.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title (must already be normalized)
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New completion flag
    pub is_completed: Option<bool>,
}

impl Task {
    /// Creates a new task
    ///
    /// The task starts uncompleted; both timestamps are set explicitly by
    /// the insert statement.
    ///
    /// # Errors
    ///
    /// Returns an error if the owning user vanished between the caller's
    /// existence check and the insert (foreign key violation), or if the
    /// database connection fails.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO tasks (title, description, is_completed, user_id, created_at, updated_at)
            VALUES ($1, $2, FALSE, $3, NOW(), NOW())
            RETURNING id
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Finds a task by ID, joined with its owner
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(&format!("{SELECT_TASK} WHERE t.id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(task)
    }

    /// Lists tasks with pagination, newest-first
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "{SELECT_TASK}{ORDER_NEWEST_FIRST} LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Counts total number of tasks
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Lists every task owned by the given user, newest-first
    ///
    /// Returns an empty list for an unknown user.
    pub async fn list_by_user(pool: &PgPool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "{SELECT_TASK} WHERE t.user_id = $1{ORDER_NEWEST_FIRST}"
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists tasks by completion state, optionally filtered to one user
    ///
    /// With `is_completed = true` this yields the completed set, with
    /// `false` the pending set; together they partition the full task list.
    pub async fn list_by_completion(
        pool: &PgPool,
        is_completed: bool,
        user_id: Option<i64>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let mut query = format!("{SELECT_TASK} WHERE t.is_completed = $1");
        if user_id.is_some() {
            query.push_str(" AND t.user_id = $2");
        }
        query.push_str(ORDER_NEWEST_FIRST);

        let mut q = sqlx::query_as::<_, Task>(&query).bind(is_completed);
        if let Some(user_id) = user_id {
            q = q.bind(user_id);
        }

        let tasks = q.fetch_all(pool).await?;

        Ok(tasks)
    }

    /// Updates an existing task
    ///
    /// Only non-None fields in `data` are written; `updated_at` is always
    /// refreshed. The update statement is built dynamically from the fields
    /// present.
    ///
    /// # Returns
    ///
    /// The updated task if found, None if the task doesn't exist
    pub async fn update(
        pool: &PgPool,
        id: i64,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut query = String::from("UPDATE tasks SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.is_completed.is_some() {
            bind_count += 1;
            query.push_str(&format!(", is_completed = ${}", bind_count));
        }

        query.push_str(" WHERE id = $1 RETURNING id");

        let mut q = sqlx::query_as::<_, (i64,)>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(is_completed) = data.is_completed {
            q = q.bind(is_completed);
        }

        match q.fetch_optional(pool).await? {
            Some((id,)) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Flips the completion flag on a task
    ///
    /// A single UPDATE statement, so two concurrent toggles still flip the
    /// flag twice rather than racing on a read-modify-write.
    ///
    /// # Returns
    ///
    /// The updated task if found, None if the task doesn't exist
    pub async fn toggle_completion(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let toggled: Option<(i64,)> = sqlx::query_as(
            r#"
            UPDATE tasks
            SET is_completed = NOT is_completed, updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        match toggled {
            Some((id,)) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    ///
    /// True if the task was deleted, false if the task didn't exist
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_task_default() {
        let update = UpdateTask::default();
        assert!(update.title.is_none());
        assert!(update.description.is_none());
        assert!(update.is_completed.is_none());
    }

    #[test]
    fn test_task_serializes_owner_id_as_user() {
        let task = Task {
            id: 7,
            title: "Write report".to_string(),
            description: String::new(),
            is_completed: false,
            user_id: 3,
            user_name: "Test User".to_string(),
            user_email: "test@example.com".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["user"], 3);
        assert!(json.get("user_id").is_none());
        assert_eq!(json["user_name"], "Test User");
        assert_eq!(json["user_email"], "test@example.com");
        assert_eq!(json["is_completed"], false);
    }

    // Integration tests for database operations are in taskboard-api/tests/
}
