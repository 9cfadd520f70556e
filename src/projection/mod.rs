pub mod error;
pub use error::{EvaluateError, ProjectionError};

pub mod input;
pub use input::{ProjectionInput, TREE_AGE_YEARS};

pub mod model;
pub use model::{ProjectionResult, project};

use crate::catalog::Catalog;

/// Resolves the species against the catalog, then runs the projection.
/// This is the boundary the presentation layer calls.
pub fn evaluate(
    catalog: &Catalog,
    input: &ProjectionInput,
) -> Result<ProjectionResult, EvaluateError> {
    let species = catalog.lookup(&input.species)?;
    let result = project(species, input)?;

    Ok(result)
}
