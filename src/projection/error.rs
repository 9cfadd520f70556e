use crate::catalog::NotFoundError;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Out-of-range user input. The UI constrains its widgets, but the
    /// model validates independently.
    InvalidParameter {
        name: &'static str,
        value: u32,
        expected: &'static str,
    },
    /// A catalog entry that violates the data invariants. Rejects that
    /// species only, never the whole catalog.
    InvalidData {
        species: String,
        field: &'static str,
        value: f64,
    },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::InvalidParameter {
                name,
                value,
                expected,
            } => {
                write!(f, "{} must be {}, got {}", name, expected, value)
            }
            ProjectionError::InvalidData {
                species,
                field,
                value,
            } => {
                write!(
                    f,
                    "species '{}' has invalid {}: {} (must not be negative)",
                    species, field, value
                )
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Union of the failures that can surface at the projection boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluateError {
    NotFound(NotFoundError),
    Projection(ProjectionError),
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluateError::NotFound(e) => write!(f, "{}", e),
            EvaluateError::Projection(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EvaluateError {}

impl From<NotFoundError> for EvaluateError {
    fn from(err: NotFoundError) -> EvaluateError {
        EvaluateError::NotFound(err)
    }
}

impl From<ProjectionError> for EvaluateError {
    fn from(err: ProjectionError) -> EvaluateError {
        EvaluateError::Projection(err)
    }
}
