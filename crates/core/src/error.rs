use thiserror::Error;

/// Rejected request input. Always maps to a client error at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },
}
