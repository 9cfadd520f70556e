use crate::catalog::species::RawSpeciesRecord;

use std::fmt;

/// A catalog source yields raw species rows; the catalog itself owns
/// normalization. The core depends on column presence, not file format.
pub trait CatalogSource {
    fn read_records(&self) -> Result<Vec<RawSpeciesRecord>, DataSourceError>;
}

/// Failure to read the catalog source. Fatal to the load: a catalog is
/// either complete or absent, never partial.
#[derive(Debug)]
pub enum DataSourceError {
    Io(std::io::Error),
    Csv(String),
    Json(serde_json::Error),
    UnknownFileType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Csv,
    Json,
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::Io(e) => write!(f, "I/O error: {}", e),
            DataSourceError::Csv(e) => write!(f, "Failed to parse CSV catalog: {}", e),
            DataSourceError::Json(e) => write!(f, "Failed to parse JSON catalog: {}", e),
            DataSourceError::UnknownFileType => {
                write!(f, "Unknown catalog file type, expected .csv or .json")
            }
        }
    }
}

impl std::error::Error for DataSourceError {}

impl From<std::io::Error> for DataSourceError {
    fn from(err: std::io::Error) -> DataSourceError {
        DataSourceError::Io(err)
    }
}

impl From<serde_json::Error> for DataSourceError {
    fn from(err: serde_json::Error) -> DataSourceError {
        DataSourceError::Json(err)
    }
}
