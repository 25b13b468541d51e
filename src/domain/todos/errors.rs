//! Todo domain error types.

use thiserror::Error;

/// Errors surfaced by list and todo operations.
///
/// Every variant is recoverable: the HTTP layer turns each one into a
/// flash message plus a re-render or redirect, never a failure status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Name length or uniqueness violation. Carries the message shown
    /// inline on the form that submitted the name.
    #[error("{0}")]
    Validation(String),

    /// List id parsed cleanly but points past the end of the sequence.
    #[error("List was not found.")]
    ListNotFound,

    /// List id was not the canonical spelling of a non-negative integer.
    #[error("List ID must be a number.")]
    MalformedId,

    /// Todo index missing from the list, usually because another tab
    /// already removed it.
    #[error("The todo item does not exist or has already been removed. Showing updated list.")]
    TodoNotFound,
}

impl TodoError {
    /// The length violation shared by list and todo names.
    pub fn length() -> Self {
        TodoError::Validation("Name must be between 1 and 100 characters.".to_string())
    }

    /// The uniqueness violation for list names.
    pub fn duplicate() -> Self {
        TodoError::Validation("Name already exists.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_user_facing_text() {
        assert_eq!(
            TodoError::length().to_string(),
            "Name must be between 1 and 100 characters."
        );
        assert_eq!(TodoError::duplicate().to_string(), "Name already exists.");
        assert_eq!(TodoError::ListNotFound.to_string(), "List was not found.");
        assert_eq!(
            TodoError::MalformedId.to_string(),
            "List ID must be a number."
        );
    }
}
