pub mod csv;
pub mod json;
pub mod types;
pub mod utils;

pub use csv::CsvSource;
pub use json::JsonSource;
pub use types::{CatalogSource, DataSourceError, FileType};
pub use utils::source_from_filetype;

pub fn create_source(file_name: String) -> Result<Box<dyn CatalogSource>, DataSourceError> {
    match source_from_filetype(file_name.as_ref())? {
        FileType::Csv => Ok(Box::new(CsvSource { file_name })),
        FileType::Json => Ok(Box::new(JsonSource { file_name })),
    }
}
