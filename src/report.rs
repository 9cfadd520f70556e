//! Assembly of the printable report payload. Pure data transformation: the
//! document and chart collaborators render it, the core never draws.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::SpeciesRecord;
use crate::projection::{ProjectionInput, ProjectionResult};

/// Reference to one rendered chart image, by name or path. The core never
/// touches the image itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRef(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

/// Flat structured record suitable for rendering as a document: a header
/// title, labeled key/value lines and one chart reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPayload {
    pub title: String,
    pub lines: Vec<ReportLine>,
    pub chart: ChartRef,
}

/// Descriptive fields accompanying one projection. The generated-on date is
/// injected by the caller so assembly stays pure.
#[derive(Debug, Clone)]
pub struct ReportDetails {
    pub species: String,
    pub soil_type: Option<String>,
    pub best_place_to_plant: Option<String>,
    pub tree_age_years: u32,
    pub cohort_size: u32,
    pub horizon_years: u32,
    pub generated_on: NaiveDate,
}

impl ReportDetails {
    pub fn new(
        species: &SpeciesRecord,
        input: &ProjectionInput,
        generated_on: NaiveDate,
    ) -> Self {
        ReportDetails {
            species: species.name.clone(),
            soil_type: species.soil_type.clone(),
            best_place_to_plant: species.best_place_to_plant.clone(),
            tree_age_years: input.tree_age_years,
            cohort_size: input.cohort_size,
            horizon_years: input.horizon_years,
            generated_on,
        }
    }
}

/// Axis labels, title and the numeric series for the chart collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub years: Vec<u32>,
    pub values: Vec<f64>,
}

pub fn chart_spec(species: &str, cohort_size: u32, series: &[f64]) -> ChartSpec {
    let horizon_years = series.len();

    let title = if cohort_size == 1 {
        format!("CO₂ Capture by {} Over {} Years", species, horizon_years)
    } else {
        format!(
            "CO₂ Sequestration for {} {} Trees Over {} Years",
            cohort_size, species, horizon_years
        )
    };

    ChartSpec {
        title,
        x_label: "Year".to_string(),
        y_label: "Cumulative CO₂ Captured (kg)".to_string(),
        years: (1..=horizon_years as u32).collect(),
        values: series.to_vec(),
    }
}

// Kilogram figures get large at cohort scale; group digits for readability
// (288000 -> "288,000").
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

pub fn format_kg(kg: f64) -> String {
    group_digits(kg.round() as u64)
}

fn line(label: &str, value: String) -> ReportLine {
    ReportLine {
        label: label.to_string(),
        value,
    }
}

pub fn build_report_payload(
    result: &ProjectionResult,
    details: &ReportDetails,
    chart: ChartRef,
) -> ReportPayload {
    let mut lines = vec![
        line("Report Date", details.generated_on.format("%Y-%m-%d").to_string()),
        line("Tree Species", details.species.clone()),
    ];

    if let Some(soil_type) = &details.soil_type {
        lines.push(line("Soil Type", soil_type.clone()));
    }

    if let Some(best_place) = &details.best_place_to_plant {
        lines.push(line("Best Place to Plant", best_place.clone()));
    }

    lines.push(line(
        "Tree Age",
        format!("{} years", details.tree_age_years),
    ));
    lines.push(line(
        "Cohort Size",
        format!("{} trees", group_digits(details.cohort_size as u64)),
    ));
    lines.push(line(
        "Adjusted Annual Rate",
        format!("{:.1} kg CO2/year per tree", result.adjusted_annual_rate_kg),
    ));
    lines.push(line(
        "CO2 Absorbed by 1 Tree",
        format!(
            "{:.2} kg over {} years",
            result.single_tree_total_kg, details.tree_age_years
        ),
    ));
    lines.push(line(
        "CO2 Absorbed by Cohort",
        format!(
            "{} kg in {} years",
            format_kg(result.cohort_total_at_horizon_kg),
            details.horizon_years
        ),
    ));

    ReportPayload {
        title: "Afforestation CO2 Report".to_string(),
        lines,
        chart,
    }
}
