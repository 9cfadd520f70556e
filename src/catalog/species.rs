use serde::Deserialize;

/// One row of the species catalog as it appears in the source file, before
/// normalization. Field aliases accept the column headers found in the
/// original survey spreadsheets.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpeciesRecord {
    #[serde(alias = "Tree Name", alias = "tree_name")]
    pub name: String,
    #[serde(alias = "CO2_per_year_kg")]
    pub co2_per_year_kg: f64,
    #[serde(alias = "Survival Rate")]
    pub survival_rate: f64,
    #[serde(alias = "Growth Factor")]
    pub growth_factor: f64,
    #[serde(default, alias = "Soil Type")]
    pub soil_type: Option<String>,
    #[serde(default, alias = "Best Place to Plant")]
    pub best_place_to_plant: Option<String>,
}

/// Biological parameters for one tree species, with `survival_rate` and
/// `growth_factor` already normalized to fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesRecord {
    pub name: String,
    pub co2_per_year_kg: f64,
    pub survival_rate: f64,
    pub growth_factor: f64,
    pub soil_type: Option<String>,
    pub best_place_to_plant: Option<String>,
}

// Source spreadsheets are inconsistent: some store survival/growth as
// fractions (0.8), others as percentages (80). Anything above 1 is treated
// as a percentage. Negative values pass through unchanged and are rejected
// later, at evaluation time.
pub fn normalize_ratio(raw: f64) -> f64 {
    if raw > 1.0 { raw / 100.0 } else { raw }
}

impl From<RawSpeciesRecord> for SpeciesRecord {
    fn from(raw: RawSpeciesRecord) -> Self {
        SpeciesRecord {
            name: raw.name,
            co2_per_year_kg: raw.co2_per_year_kg,
            survival_rate: normalize_ratio(raw.survival_rate),
            growth_factor: normalize_ratio(raw.growth_factor),
            soil_type: raw.soil_type,
            best_place_to_plant: raw.best_place_to_plant,
        }
    }
}
