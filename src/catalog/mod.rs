use std::collections::BTreeMap;
use std::path::Path;

use crate::readers::{DataSourceError, create_source};

pub mod error;
pub use error::NotFoundError;

pub mod species;
pub use species::{RawSpeciesRecord, SpeciesRecord, normalize_ratio};

/// Read-only collection of per-species biological parameters, keyed by
/// species name. Loaded once at startup; there is no mutation API, so
/// shared references are safe across threads without synchronization.
#[derive(Debug, Clone)]
pub struct Catalog {
    species: BTreeMap<String, SpeciesRecord>,
}

impl Catalog {
    /// Loads a catalog from a CSV or JSON file, dispatching on the file
    /// extension. Normalization of survival/growth ratios happens here,
    /// once, not at every evaluation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog, DataSourceError> {
        let file_name = path.as_ref().to_string_lossy().to_string();
        let records = create_source(file_name)?.read_records()?;

        Ok(Catalog::from_records(records))
    }

    /// Builds a catalog from raw rows. When the same species name appears
    /// more than once, the last row wins.
    pub fn from_records(records: Vec<RawSpeciesRecord>) -> Catalog {
        let species = records
            .into_iter()
            .map(SpeciesRecord::from)
            .map(|record| (record.name.clone(), record))
            .collect();

        Catalog { species }
    }

    pub fn lookup(&self, name: &str) -> Result<&SpeciesRecord, NotFoundError> {
        self.species
            .get(name)
            .ok_or_else(|| NotFoundError(name.to_string()))
    }

    /// Species names in sorted order, as presented in selection widgets.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.species.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn raw(name: &str, survival_rate: f64) -> RawSpeciesRecord {
        RawSpeciesRecord {
            name: name.to_string(),
            co2_per_year_kg: 20.0,
            survival_rate,
            growth_factor: 0.9,
            soil_type: None,
            best_place_to_plant: None,
        }
    }

    #[test]
    fn test_load_csv_normalizes_ratios() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("species.csv");
        let mut file = File::create(&path).unwrap();

        let catalog_data = "\
name,co2_per_year_kg,survival_rate,growth_factor
Neem,20,80,90
Banyan,35,0.7,0.85
";

        file.write_all(catalog_data.as_bytes()).unwrap();

        let catalog = Catalog::load(&path).unwrap();

        assert_eq!(catalog.len(), 2);

        let neem = catalog.lookup("Neem").unwrap();
        assert_eq!(neem.survival_rate, 0.8);
        assert_eq!(neem.growth_factor, 0.9);

        let banyan = catalog.lookup("Banyan").unwrap();
        assert_eq!(banyan.survival_rate, 0.7);
    }

    #[test]
    fn test_load_unknown_extension() {
        assert!(matches!(
            Catalog::load("species.xlsx"),
            Err(DataSourceError::UnknownFileType)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Catalog::load("no_such_catalog.json"),
            Err(DataSourceError::Io(_))
        ));
    }

    #[test]
    fn test_lookup_unknown_species() {
        let catalog = Catalog::from_records(vec![raw("Neem", 0.8)]);

        let err = catalog.lookup("Baobab").unwrap_err();
        assert_eq!(err, NotFoundError("Baobab".to_string()));
    }

    #[test]
    fn test_duplicate_rows_last_wins() {
        let catalog = Catalog::from_records(vec![raw("Neem", 0.5), raw("Neem", 0.8)]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("Neem").unwrap().survival_rate, 0.8);
    }

    #[test]
    fn test_names_are_sorted() {
        let catalog = Catalog::from_records(vec![raw("Teak", 0.8), raw("Banyan", 0.7)]);

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Banyan", "Teak"]);
    }
}
