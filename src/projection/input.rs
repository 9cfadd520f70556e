use super::error::ProjectionError;

use std::ops::RangeInclusive;

/// Valid tree ages, also used by the presentation layer for its slider
/// bounds.
pub const TREE_AGE_YEARS: RangeInclusive<u32> = 1..=200;

/// User-chosen parameters for one projection. `new` validates, and the
/// model re-validates, so a hand-built value cannot bypass the checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionInput {
    pub species: String,
    pub tree_age_years: u32,
    pub cohort_size: u32,
    pub horizon_years: u32,
}

impl ProjectionInput {
    pub fn new(
        species: &str,
        tree_age_years: u32,
        cohort_size: u32,
        horizon_years: u32,
    ) -> Result<Self, ProjectionError> {
        let input = ProjectionInput {
            species: species.to_string(),
            tree_age_years,
            cohort_size,
            horizon_years,
        };

        input.validate()?;

        Ok(input)
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !TREE_AGE_YEARS.contains(&self.tree_age_years) {
            return Err(ProjectionError::InvalidParameter {
                name: "tree_age_years",
                value: self.tree_age_years,
                expected: "between 1 and 200",
            });
        }

        if self.cohort_size == 0 {
            return Err(ProjectionError::InvalidParameter {
                name: "cohort_size",
                value: self.cohort_size,
                expected: "a positive integer",
            });
        }

        if self.horizon_years == 0 {
            return Err(ProjectionError::InvalidParameter {
                name: "horizon_years",
                value: self.horizon_years,
                expected: "a positive integer",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let input = ProjectionInput::new("Neem", 10, 1000, 20);
        assert!(input.is_ok());
    }

    #[test]
    fn test_zero_tree_age_rejected() {
        let err = ProjectionInput::new("Neem", 0, 1000, 20).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::InvalidParameter {
                name: "tree_age_years",
                ..
            }
        ));
    }

    #[test]
    fn test_tree_age_above_range_rejected() {
        assert!(ProjectionInput::new("Neem", 201, 1000, 20).is_err());
        assert!(ProjectionInput::new("Neem", 200, 1000, 20).is_ok());
    }

    #[test]
    fn test_zero_cohort_rejected() {
        let err = ProjectionInput::new("Neem", 10, 0, 20).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::InvalidParameter {
                name: "cohort_size",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = ProjectionInput::new("Neem", 10, 1000, 0).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::InvalidParameter {
                name: "horizon_years",
                ..
            }
        ));
    }
}
