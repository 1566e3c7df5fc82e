#[cfg(test)]
#[path = "../../tests/unit/solver/northwest_test.rs"]
mod northwest_test;

use crate::models::{Allocation, Problem};
use crate::solver::Solver;
use crate::utils::GenericResult;
use crate::validation::validate_dimensions;

/// Implements North-West Corner method: starts at the top-left cell and moves either down,
/// when a source is exhausted, or right, when a destination is satisfied. Costs are ignored.
///
/// When a source and a destination are exhausted at the same step, the column moves first:
/// the exhausted source then receives a zero allocation at the next cell and the row moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NorthWestCorner;

impl Solver for NorthWestCorner {
    fn name(&self) -> &str {
        "north-west-corner"
    }

    fn solve(&self, problem: &Problem) -> GenericResult<Allocation> {
        validate_dimensions(problem)?;

        let mut supply = problem.supply.clone();
        let mut demand = problem.demand.clone();
        let mut allocation = Allocation::new(supply.len(), demand.len());

        let (mut row, mut col) = (0, 0);
        while row < supply.len() && col < demand.len() {
            let units = supply[row].min(demand[col]);

            allocation.add(row, col, units);
            supply[row] -= units;
            demand[col] -= units;

            if supply[row] == 0 && demand[col] > 0 {
                row += 1;
            } else {
                col += 1;
            }
        }

        Ok(allocation)
    }
}
