/// Database models for Taskboard
///
/// This module contains the database models and their repository operations.
/// Repository functions are stateless: each takes the pool and plain input
/// structs, and performs a single atomic store interaction.
///
/// # Models
///
/// - `user`: User accounts owning tasks
/// - `task`: Tasks with a title, description, and completion flag
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::user::{CreateUser, User};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     name: "John Doe".to_string(),
///     email: "john.doe@example.com".to_string(),
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
