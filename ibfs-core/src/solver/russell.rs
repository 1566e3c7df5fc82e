#[cfg(test)]
#[path = "../../tests/unit/solver/russell_test.rs"]
mod russell_test;

use crate::models::{Allocation, Cost, Problem};
use crate::solver::Solver;
use crate::utils::GenericResult;
use crate::validation::validate_dimensions;

/// Implements Russell's Approximation method: on every step, row and column potentials are
/// propagated over unallocated cells and the cell with the largest `cost - (u + v)` value
/// receives as much as possible.
///
/// Exhausted rows and columns are masked in a working copy of the cost matrix with an
/// "infinite" cost, so the matrix keeps its size and indices never shift. A row is masked when
/// its supply is exhausted, a column is masked when its demand is satisfied.
#[derive(Clone, Copy, Debug, Default)]
pub struct RussellApproximation;

/// A row or column potential, `None` means it is not known yet.
type Potential = Option<i128>;

/// A working copy of the cost matrix, `None` is an infinite (masked) cost.
struct MaskedCosts {
    values: Vec<Option<Cost>>,
    rows: usize,
    cols: usize,
}

impl MaskedCosts {
    fn new(problem: &Problem) -> Self {
        let costs = &problem.costs;
        Self { values: costs.iter().map(|(_, _, cost)| Some(cost)).collect(), rows: costs.rows(), cols: costs.cols() }
    }

    fn mask_row(&mut self, row: usize) {
        self.values[row * self.cols..(row + 1) * self.cols].iter_mut().for_each(|cost| *cost = None);
    }

    fn mask_col(&mut self, col: usize) {
        self.values.iter_mut().skip(col).step_by(self.cols).for_each(|cost| *cost = None);
    }

    /// Returns all cells which are not masked in row-major order.
    fn iter(&self) -> impl Iterator<Item = (usize, usize, Cost)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(index, cost)| cost.map(|cost| (index / self.cols, index % self.cols, cost)))
    }

    /// Returns the first row which still has a cell which is not masked.
    fn first_live_row(&self) -> Option<usize> {
        self.iter().next().map(|(row, _, _)| row)
    }
}

impl Solver for RussellApproximation {
    fn name(&self) -> &str {
        "russell"
    }

    fn solve(&self, problem: &Problem) -> GenericResult<Allocation> {
        validate_dimensions(problem)?;

        let mut supply = problem.supply.clone();
        let mut demand = problem.demand.clone();
        let mut allocation = Allocation::new(supply.len(), demand.len());
        let mut costs = MaskedCosts::new(problem);

        // terminates when no cell has both potentials known: every step masks a row or a column
        while let Some((row, col)) = select_cell(&costs, &allocation) {
            let units = supply[row].min(demand[col]);
            allocation.add(row, col, units);
            supply[row] -= units;
            demand[col] -= units;

            if supply[row] == 0 {
                costs.mask_row(row);
            }
            if demand[col] == 0 {
                costs.mask_col(col);
            }
        }

        Ok(allocation)
    }
}

/// Selects a cell with the strictly largest `cost - (u + v)`, the first one in row-major
/// order wins on ties.
fn select_cell(costs: &MaskedCosts, allocation: &Allocation) -> Option<(usize, usize)> {
    let (u, v) = get_potentials(costs, allocation);

    costs
        .iter()
        .filter_map(|(row, col, cost)| match (u[row], v[col]) {
            (Some(u), Some(v)) => Some((row, col, cost as i128 - (u + v))),
            _ => None,
        })
        .fold(None, |best: Option<(usize, usize, i128)>, (row, col, diff)| match best {
            Some((_, _, best_diff)) if diff <= best_diff => best,
            _ => Some((row, col, diff)),
        })
        .map(|(row, col, _)| (row, col))
}

/// Propagates potentials from the first live row over unallocated cells until a fixed point
/// is reached. Potentials of rows and columns which are not connected to the seed row stay unset.
fn get_potentials(costs: &MaskedCosts, allocation: &Allocation) -> (Vec<Potential>, Vec<Potential>) {
    let mut u: Vec<Potential> = vec![None; costs.rows];
    let mut v: Vec<Potential> = vec![None; costs.cols];

    let Some(seed) = costs.first_live_row() else { return (u, v) };
    u[seed] = Some(0);

    loop {
        let mut is_changed = false;

        for (row, col, cost) in costs.iter().filter(|(row, col, _)| allocation.get(*row, *col) == 0) {
            match (u[row], v[col]) {
                (Some(known), None) => {
                    v[col] = Some(cost as i128 - known);
                    is_changed = true;
                }
                (None, Some(known)) => {
                    u[row] = Some(cost as i128 - known);
                    is_changed = true;
                }
                _ => {}
            }
        }

        if !is_changed {
            break;
        }
    }

    (u, v)
}
