use afforest::catalog::Catalog;
use afforest::projection::{ProjectionInput, evaluate};
use afforest::render::{DocumentWriter, TextDocumentWriter};
use afforest::report::{ChartRef, ReportDetails, build_report_payload, chart_spec, format_kg};
use afforest::site::EAST_GODAVARI;

use chrono::Utc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting afforestation impact projection...");

    let catalog = Catalog::load("./data/species/local_tree_species.csv")?;
    println!(
        "Loaded {} species: {:?}",
        catalog.len(),
        catalog.names().collect::<Vec<&str>>()
    );

    let input = ProjectionInput::new("Neem", 10, 1000, 20)?;
    let result = evaluate(&catalog, &input)?;

    println!(
        "{} - adjusted annual rate: {:.1} kg CO2/year per tree",
        input.species, result.adjusted_annual_rate_kg
    );
    println!(
        "  One tree over {} years: {:.1} kg CO2",
        input.tree_age_years, result.single_tree_total_kg
    );
    println!(
        "  {} trees at year {}: {} kg CO2",
        input.cohort_size,
        input.horizon_years,
        format_kg(result.cohort_total_at_horizon_kg)
    );

    let species = catalog.lookup(&input.species)?;

    let spec = chart_spec(&species.name, input.cohort_size, &result.yearly_series_kg);
    println!("  Chart: {} ({} points)", spec.title, spec.values.len());

    // Chart rendering belongs to the presentation layer; the payload only
    // carries a reference to the image.
    let chart = ChartRef(format!(
        "{}_cohort_projection.png",
        species.name.to_lowercase()
    ));

    let details = ReportDetails::new(species, &input, Utc::now().date_naive());
    let payload = build_report_payload(&result, &details, chart);

    let document = TextDocumentWriter.write(&payload)?;
    println!("\n{}", String::from_utf8_lossy(&document));

    println!(
        "Planting site marker: {:.1} N, {:.1} E",
        EAST_GODAVARI.latitude, EAST_GODAVARI.longitude
    );

    Ok(())
}
