//! # Taskboard Shared Library
//!
//! This crate contains the data layer shared by the Taskboard API server:
//! connection pooling, migrations, database models, and pure validation
//! helpers.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and migration runner
//! - `models`: Database models (`User`, `Task`) and their repository operations
//! - `validation`: Pure field-level validation functions

pub mod db;
pub mod models;
pub mod validation;

/// Current version of the Taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
