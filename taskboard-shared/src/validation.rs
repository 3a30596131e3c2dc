/// Pure validation functions invoked before persistence
///
/// Domain rules live here as plain functions so the repository layer never
/// has to trust its callers: handlers normalize input first, then hand the
/// result to the store.

use thiserror::Error;

/// Title validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    /// Title was empty or whitespace-only after trimming
    #[error("Title cannot be empty")]
    Empty,
}

/// Trims surrounding whitespace from a task title and rejects empty results
///
/// The trimmed value is what gets stored, so normalization is idempotent:
/// `normalize_title("  X  ")` and `normalize_title("X")` both yield `"X"`.
///
/// # Errors
///
/// Returns [`TitleError::Empty`] when the title is empty or whitespace-only.
pub fn normalize_title(raw: &str) -> Result<String, TitleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TitleError::Empty);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title_trims_whitespace() {
        assert_eq!(normalize_title("  X  ").unwrap(), "X");
        assert_eq!(normalize_title("\tBuy milk\n").unwrap(), "Buy milk");
    }

    #[test]
    fn test_normalize_title_is_idempotent() {
        let once = normalize_title("  Write report  ").unwrap();
        let twice = normalize_title(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_title_rejects_empty() {
        assert_eq!(normalize_title(""), Err(TitleError::Empty));
        assert_eq!(normalize_title("   "), Err(TitleError::Empty));
        assert_eq!(normalize_title("\t\n"), Err(TitleError::Empty));
    }

    #[test]
    fn test_normalize_title_keeps_interior_whitespace() {
        assert_eq!(normalize_title(" a  b ").unwrap(), "a  b");
    }
}
