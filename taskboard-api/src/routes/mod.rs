/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User CRUD and per-user task listing
/// - `tasks`: Task CRUD, completion toggle, and completion-state filters
/// - `pagination`: Shared pagination parameters and response envelope

pub mod health;
pub mod pagination;
pub mod tasks;
pub mod users;
