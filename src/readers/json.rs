use super::types::{CatalogSource, DataSourceError};
use crate::catalog::species::RawSpeciesRecord;

use std::fs::File;
use std::io::BufReader;

/// JSON catalog source: a top-level array of species objects. Missing
/// required fields surface as a deserialization error for the whole load.
pub struct JsonSource {
    pub file_name: String,
}

impl CatalogSource for JsonSource {
    fn read_records(&self) -> Result<Vec<RawSpeciesRecord>, DataSourceError> {
        let file = File::open(&self.file_name)?;
        let reader = BufReader::new(file);

        let records: Vec<RawSpeciesRecord> = serde_json::from_reader(reader)?;

        Ok(records)
    }
}
