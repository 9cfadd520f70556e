//! Linear CO₂ sequestration projection model.
//!
//! Turns the biological parameters of one species into a cumulative CO₂
//! estimate for a planting cohort. The model is a deterministic, closed-form
//! estimator with no I/O and no hidden state:
//!
//! 1. **Adjusted annual rate**: the nominal per-tree absorption rate,
//!    discounted by the survival and growth multipliers:
//!    `adjusted = co2_per_year_kg × survival_rate × growth_factor`
//! 2. **Single-tree total**: `adjusted × tree_age_years`
//! 3. **Cohort series**: cumulative CO₂ for the whole cohort at each year
//!    `y` in `1..=horizon_years`: `adjusted × y × cohort_size`
//!
//! Accumulation is linear, not compounding: every tree in the cohort is
//! assumed to absorb at the same constant adjusted rate from year 1 onward.
//! There is no maturation curve and no mortality-over-time curve beyond the
//! single static survival factor.
//!
//! ## Usage example
//!
//! ```rust
//! use afforest::catalog::SpeciesRecord;
//! use afforest::projection::{ProjectionInput, project};
//!
//! let species = SpeciesRecord {
//!     name: "Neem".to_string(),
//!     co2_per_year_kg: 20.0,
//!     survival_rate: 0.8,
//!     growth_factor: 0.9,
//!     soil_type: None,
//!     best_place_to_plant: None,
//! };
//!
//! let input = ProjectionInput::new("Neem", 10, 1000, 20).unwrap();
//! let result = project(&species, &input).unwrap();
//!
//! assert_eq!(result.adjusted_annual_rate_kg, 14.4);
//! assert_eq!(result.single_tree_total_kg, 144.0);
//! assert_eq!(result.cohort_total_at_horizon_kg, 288_000.0);
//! ```

use super::error::ProjectionError;
use super::input::ProjectionInput;
use crate::catalog::SpeciesRecord;

/// Output of one projection. Created fresh per call and owned by the
/// caller; two calls with identical inputs produce bit-identical results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    /// Per-individual absorption rate after survival/growth discounting [kg/year].
    pub adjusted_annual_rate_kg: f64,
    /// Cumulative absorption of one tree over `tree_age_years` [kg].
    pub single_tree_total_kg: f64,
    /// Cumulative cohort absorption at each year `1..=horizon_years` [kg].
    pub yearly_series_kg: Vec<f64>,
    /// Last element of the series [kg].
    pub cohort_total_at_horizon_kg: f64,
}

// A record with a negative rate or multiplier must not silently produce
// negative sequestration. Zero is valid: it models a non-viable species.
fn check_species(species: &SpeciesRecord) -> Result<(), ProjectionError> {
    let fields = [
        ("co2_per_year_kg", species.co2_per_year_kg),
        ("survival_rate", species.survival_rate),
        ("growth_factor", species.growth_factor),
    ];

    for (field, value) in fields {
        if value < 0.0 {
            return Err(ProjectionError::InvalidData {
                species: species.name.clone(),
                field,
                value,
            });
        }
    }

    Ok(())
}

/// Pure projection of `(species, input)` into a [`ProjectionResult`].
///
/// Validates the input parameters and the species record independently of
/// whatever the presentation layer already checked.
pub fn project(
    species: &SpeciesRecord,
    input: &ProjectionInput,
) -> Result<ProjectionResult, ProjectionError> {
    input.validate()?;
    check_species(species)?;

    let adjusted_annual_rate_kg =
        species.co2_per_year_kg * species.survival_rate * species.growth_factor;

    let single_tree_total_kg = adjusted_annual_rate_kg * input.tree_age_years as f64;

    let yearly_series_kg: Vec<f64> = (1..=input.horizon_years)
        .map(|year| adjusted_annual_rate_kg * year as f64 * input.cohort_size as f64)
        .collect();

    // horizon_years >= 1 is guaranteed by validate, so the series is never empty
    let cohort_total_at_horizon_kg = yearly_series_kg.last().copied().unwrap_or(0.0);

    Ok(ProjectionResult {
        adjusted_annual_rate_kg,
        single_tree_total_kg,
        yearly_series_kg,
        cohort_total_at_horizon_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neem() -> SpeciesRecord {
        SpeciesRecord {
            name: "Neem".to_string(),
            co2_per_year_kg: 20.0,
            survival_rate: 0.8,
            growth_factor: 0.9,
            soil_type: Some("Red loam".to_string()),
            best_place_to_plant: Some("Roadsides".to_string()),
        }
    }

    fn input(tree_age: u32, cohort: u32, horizon: u32) -> ProjectionInput {
        ProjectionInput::new("Neem", tree_age, cohort, horizon).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let result = project(&neem(), &input(10, 1000, 20)).unwrap();

        assert_eq!(result.adjusted_annual_rate_kg, 14.4);
        assert_eq!(result.single_tree_total_kg, 144.0);
        assert_eq!(result.yearly_series_kg.len(), 20);
        assert_eq!(result.yearly_series_kg[0], 14_400.0);
        assert_eq!(result.yearly_series_kg[19], 288_000.0);
        assert_eq!(result.cohort_total_at_horizon_kg, 288_000.0);
    }

    #[test]
    fn test_exact_linear_law() {
        let result = project(&neem(), &input(10, 1000, 20)).unwrap();

        for (index, value) in result.yearly_series_kg.iter().enumerate() {
            let year = (index + 1) as f64;
            assert_eq!(*value, result.adjusted_annual_rate_kg * year * 1000.0);
        }
    }

    #[test]
    fn test_series_is_strictly_increasing() {
        let result = project(&neem(), &input(10, 1000, 20)).unwrap();

        assert!(result.adjusted_annual_rate_kg > 0.0);
        for pair in result.yearly_series_kg.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_cohort_scaling_invariance() {
        let single = project(&neem(), &input(10, 1, 20)).unwrap();
        let cohort = project(&neem(), &input(10, 1000, 20)).unwrap();

        for (single_value, cohort_value) in single
            .yearly_series_kg
            .iter()
            .zip(cohort.yearly_series_kg.iter())
        {
            assert_eq!(*cohort_value, single_value * 1000.0);
        }
    }

    #[test]
    fn test_idempotence() {
        let first = project(&neem(), &input(10, 1000, 20)).unwrap();
        let second = project(&neem(), &input(10, 1000, 20)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_survival_rate_yields_all_zero_series() {
        let mut species = neem();
        species.survival_rate = 0.0;

        let result = project(&species, &input(10, 1000, 20)).unwrap();

        assert_eq!(result.adjusted_annual_rate_kg, 0.0);
        assert!(result.yearly_series_kg.iter().all(|&v| v == 0.0));
        assert_eq!(result.cohort_total_at_horizon_kg, 0.0);
    }

    #[test]
    fn test_zero_growth_factor_yields_all_zero_series() {
        let mut species = neem();
        species.growth_factor = 0.0;

        let result = project(&species, &input(10, 1000, 20)).unwrap();

        assert!(result.yearly_series_kg.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_series_is_non_decreasing_at_zero_rate() {
        let mut species = neem();
        species.survival_rate = 0.0;

        let result = project(&species, &input(10, 1000, 20)).unwrap();

        for pair in result.yearly_series_kg.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_negative_species_field_rejected() {
        let mut species = neem();
        species.growth_factor = -0.1;

        let err = project(&species, &input(10, 1000, 20)).unwrap_err();

        assert!(matches!(
            err,
            ProjectionError::InvalidData {
                field: "growth_factor",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut species = neem();
        species.co2_per_year_kg = -1.0;

        assert!(matches!(
            project(&species, &input(10, 1000, 20)),
            Err(ProjectionError::InvalidData { .. })
        ));
    }

    #[test]
    fn test_hand_built_input_still_validated() {
        // Bypass ProjectionInput::new on purpose.
        let bad = ProjectionInput {
            species: "Neem".to_string(),
            tree_age_years: 10,
            cohort_size: 1000,
            horizon_years: 0,
        };

        assert!(matches!(
            project(&neem(), &bad),
            Err(ProjectionError::InvalidParameter { .. })
        ));
    }
}
