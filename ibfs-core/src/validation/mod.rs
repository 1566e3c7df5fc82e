//! This module provides functionality to validate problem definition before any solver runs.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::models::{Cost, Problem, Units, get_total};
use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

/// Specifies reasons why a problem cannot be solved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Problem has no sources or no destinations.
    EmptyProblem,

    /// Cost matrix size does not match amount of sources and destinations.
    DimensionMismatch {
        /// Expected size: amount of sources and destinations.
        expected: (usize, usize),
        /// Actual size of the cost matrix.
        actual: (usize, usize),
    },

    /// Cost matrix contains a negative cost.
    NegativeCost {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// Cost value.
        cost: Cost,
    },

    /// Total supply is not equal to total demand.
    Unbalanced {
        /// Total supply.
        supply: u128,
        /// Total demand.
        demand: u128,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProblem => write!(f, "problem has no sources or no destinations"),
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "dimension mismatch: cost matrix is {}x{}, expected {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::NegativeCost { row, col, cost } => write!(f, "negative cost {cost} at cell ({row}, {col})"),
            Self::Unbalanced { supply, demand } => {
                write!(f, "problem is not balanced: total supply is {supply}, total demand is {demand}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for GenericError {
    fn from(error: ValidationError) -> Self {
        error.to_string().into()
    }
}

/// Checks whether total supply equals total demand.
pub fn is_balanced(supply: &[Units], demand: &[Units]) -> bool {
    get_total(supply) == get_total(demand)
}

/// Checks that cost matrix size matches amount of sources and destinations.
pub fn validate_dimensions(problem: &Problem) -> Result<(), ValidationError> {
    let expected = (problem.sources(), problem.destinations());
    let actual = (problem.costs.rows(), problem.costs.cols());

    if expected != actual {
        return Err(ValidationError::DimensionMismatch { expected, actual });
    }

    Ok(())
}

/// Validates that the problem can be passed to any of solvers.
pub fn validate_problem(problem: &Problem) -> Result<(), ValidationError> {
    if problem.sources() == 0 || problem.destinations() == 0 {
        return Err(ValidationError::EmptyProblem);
    }

    validate_dimensions(problem)?;

    if let Some((row, col, cost)) = problem.costs.iter().find(|(_, _, cost)| *cost < 0) {
        return Err(ValidationError::NegativeCost { row, col, cost });
    }

    if !is_balanced(problem.supply.as_slice(), problem.demand.as_slice()) {
        return Err(ValidationError::Unbalanced { supply: problem.total_supply(), demand: problem.total_demand() });
    }

    Ok(())
}
