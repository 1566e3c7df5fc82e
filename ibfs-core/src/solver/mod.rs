//! This module contains heuristics which build an initial basic feasible solution of
//! a balanced transportation problem.
//!
//! Every heuristic implements [`Solver`] trait and expects a validated problem: use
//! [`Builder`] to get a [`SolverPipeline`] which validates a problem first and refuses to run
//! any method on unbalanced or malformed input.

use crate::models::{Allocation, Problem};
use crate::utils::{GenericError, GenericResult};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

mod builder;
pub use self::builder::*;

mod northwest;
pub use self::northwest::NorthWestCorner;

mod russell;
pub use self::russell::RussellApproximation;

mod vogel;
pub use self::vogel::VogelApproximation;

/// A heuristic which builds an allocation for a balanced problem.
pub trait Solver {
    /// Returns a human readable name of the method.
    fn name(&self) -> &str;

    /// Builds an allocation. Fails with dimension mismatch error when cost matrix size does not
    /// match supply and demand, other checks are expected to be done before, see `validate_problem`.
    /// The problem itself is never changed.
    fn solve(&self, problem: &Problem) -> GenericResult<Allocation>;
}

/// Specifies available IBFS methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MethodType {
    /// North-West Corner method.
    NorthWestCorner,
    /// Vogel's Approximation method.
    Vogel,
    /// Russell's Approximation method.
    Russell,
}

impl MethodType {
    /// Returns all methods in their default order.
    pub fn all() -> Vec<MethodType> {
        vec![MethodType::NorthWestCorner, MethodType::Vogel, MethodType::Russell]
    }

    /// Creates a solver which implements the method.
    pub fn create_solver(&self) -> Box<dyn Solver> {
        match self {
            MethodType::NorthWestCorner => Box::new(NorthWestCorner),
            MethodType::Vogel => Box::new(VogelApproximation),
            MethodType::Russell => Box::new(RussellApproximation),
        }
    }
}

impl Display for MethodType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MethodType::NorthWestCorner => "north-west-corner",
            MethodType::Vogel => "vogel",
            MethodType::Russell => "russell",
        };

        write!(f, "{name}")
    }
}

impl FromStr for MethodType {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "north-west-corner" | "nwc" => Ok(MethodType::NorthWestCorner),
            "vogel" | "vam" => Ok(MethodType::Vogel),
            "russell" | "ram" => Ok(MethodType::Russell),
            _ => Err(format!("unknown method: '{value}'").into()),
        }
    }
}
