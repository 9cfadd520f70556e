use std::fmt;

/// A species name that is not a key of the catalog. Recoverable: the caller
/// re-prompts for a valid name. A lookup never falls back to a default
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError(pub String);

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "species '{}' not found in catalog", self.0)
    }
}

impl std::error::Error for NotFoundError {}
