use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the bug tracking forms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BugError {
    #[error(
        "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
    )]
    InvalidUsername,
    #[error("Developer {0} is listed more than once")]
    DuplicateOwner(i64),
}

impl From<BugError> for ValidationError {
    fn from(err: BugError) -> Self {
        let (field, code) = match &err {
            BugError::InvalidUsername => ("username", "invalid"),
            BugError::DuplicateOwner(_) => ("owners", "unique"),
        };
        ValidationError::new(field, code, err.to_string())
    }
}
