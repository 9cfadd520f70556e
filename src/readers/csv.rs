use super::types::{CatalogSource, DataSourceError};
use crate::catalog::species::RawSpeciesRecord;

use std::fs;

/// Comma-separated catalog source. Header names are matched after trimming,
/// lowercasing and replacing spaces with underscores, so "Tree Name" and
/// "tree_name" resolve to the same column. Species names must not contain
/// commas; the survey exports never quote fields.
pub struct CsvSource {
    pub file_name: String,
}

struct ColumnMap {
    name: usize,
    co2_per_year_kg: usize,
    survival_rate: usize,
    growth_factor: usize,
    soil_type: Option<usize>,
    best_place_to_plant: Option<usize>,
}

fn normalize_header(cell: &str) -> String {
    cell.trim().to_lowercase().replace(' ', "_")
}

fn required_column(headers: &[String], names: &[&str]) -> Result<usize, DataSourceError> {
    headers
        .iter()
        .position(|h| names.contains(&h.as_str()))
        .ok_or_else(|| DataSourceError::Csv(format!("missing required column '{}'", names[0])))
}

impl ColumnMap {
    fn from_header(line: &str) -> Result<Self, DataSourceError> {
        let headers: Vec<String> = line.split(',').map(normalize_header).collect();

        Ok(ColumnMap {
            name: required_column(&headers, &["name", "tree_name"])?,
            co2_per_year_kg: required_column(&headers, &["co2_per_year_kg"])?,
            survival_rate: required_column(&headers, &["survival_rate"])?,
            growth_factor: required_column(&headers, &["growth_factor"])?,
            soil_type: headers.iter().position(|h| h == "soil_type"),
            best_place_to_plant: headers.iter().position(|h| h == "best_place_to_plant"),
        })
    }
}

fn parse_number(fields: &[&str], index: usize, line_no: usize) -> Result<f64, DataSourceError> {
    fields[index].trim().parse::<f64>().map_err(|_| {
        DataSourceError::Csv(format!(
            "line {}: invalid number '{}'",
            line_no,
            fields[index].trim()
        ))
    })
}

fn optional_text(fields: &[&str], index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| fields.get(i))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

impl CatalogSource for CsvSource {
    fn read_records(&self) -> Result<Vec<RawSpeciesRecord>, DataSourceError> {
        let content = fs::read_to_string(&self.file_name)?;

        let mut lines = content.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| DataSourceError::Csv("empty catalog file".to_string()))?;
        let columns = ColumnMap::from_header(header)?;

        let required_width = columns
            .name
            .max(columns.co2_per_year_kg)
            .max(columns.survival_rate)
            .max(columns.growth_factor)
            + 1;

        let mut records = Vec::new();

        for (index, line) in lines {
            let line_no = index + 1;
            let fields: Vec<&str> = line.split(',').collect();

            if fields.len() < required_width {
                return Err(DataSourceError::Csv(format!(
                    "line {}: expected at least {} fields, got {}",
                    line_no,
                    required_width,
                    fields.len()
                )));
            }

            records.push(RawSpeciesRecord {
                name: fields[columns.name].trim().to_string(),
                co2_per_year_kg: parse_number(&fields, columns.co2_per_year_kg, line_no)?,
                survival_rate: parse_number(&fields, columns.survival_rate, line_no)?,
                growth_factor: parse_number(&fields, columns.growth_factor, line_no)?,
                soil_type: optional_text(&fields, columns.soil_type),
                best_place_to_plant: optional_text(&fields, columns.best_place_to_plant),
            });
        }

        Ok(records)
    }
}
