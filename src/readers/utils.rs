use super::types::{DataSourceError, FileType};
use std::path::Path;

pub fn source_from_filetype(path: &Path) -> Result<FileType, DataSourceError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Ok(FileType::Csv),
        Some("json") => Ok(FileType::Json),
        _ => Err(DataSourceError::UnknownFileType),
    }
}
