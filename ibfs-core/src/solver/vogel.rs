#[cfg(test)]
#[path = "../../tests/unit/solver/vogel_test.rs"]
mod vogel_test;

use crate::models::{Allocation, Cost, CostMatrix, Problem};
use crate::solver::Solver;
use crate::utils::{BitVec, GenericResult};
use crate::validation::validate_dimensions;

/// Implements Vogel's Approximation method: on every step, a row or a column with the largest
/// penalty (difference between its two smallest costs) is selected and the cheapest cell there
/// receives as much as possible.
///
/// Exhausted rows and columns are never removed from the cost matrix: they are marked in two
/// bit vectors instead, so allocations always refer to original source and destination indices.
/// Ties are resolved by scan order: rows before columns, lower index first.
#[derive(Clone, Copy, Debug, Default)]
pub struct VogelApproximation;

/// A row or a column of the cost matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Line {
    Row(usize),
    Column(usize),
}

/// Keeps track of exhausted rows and columns.
struct LiveIndex {
    exhausted_rows: BitVec,
    exhausted_cols: BitVec,
}

impl LiveIndex {
    fn new(rows: usize, cols: usize) -> Self {
        Self { exhausted_rows: BitVec::new(rows), exhausted_cols: BitVec::new(cols) }
    }

    fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.exhausted_rows.iter_unset()
    }

    fn cols(&self) -> impl Iterator<Item = usize> + '_ {
        self.exhausted_cols.iter_unset()
    }
}

impl Solver for VogelApproximation {
    fn name(&self) -> &str {
        "vogel"
    }

    fn solve(&self, problem: &Problem) -> GenericResult<Allocation> {
        validate_dimensions(problem)?;

        let costs = &problem.costs;
        let mut supply = problem.supply.clone();
        let mut demand = problem.demand.clone();
        let mut allocation = Allocation::new(supply.len(), demand.len());
        let mut index = LiveIndex::new(supply.len(), demand.len());

        // no cell is selected once all rows or all columns are exhausted
        while let Some((row, col)) = select_cell(costs, &index) {
            let units = supply[row].min(demand[col]);
            allocation.add(row, col, units);
            supply[row] -= units;
            demand[col] -= units;

            // both can be exhausted at once (degenerate case)
            if supply[row] == 0 {
                index.exhausted_rows.set(row, true);
            }
            if demand[col] == 0 {
                index.exhausted_cols.set(col, true);
            }
        }

        Ok(allocation)
    }
}

/// Selects the cheapest live cell of a line with the largest penalty.
fn select_cell(costs: &CostMatrix, index: &LiveIndex) -> Option<(usize, usize)> {
    select_line(costs, index).and_then(|line| match line {
        Line::Row(row) => get_cheapest(index.cols(), |col| costs.get(row, col)).map(|col| (row, col)),
        Line::Column(col) => get_cheapest(index.rows(), |row| costs.get(row, col)).map(|row| (row, col)),
    })
}

/// Selects a line with the strictly largest penalty, rows are scanned before columns.
fn select_line(costs: &CostMatrix, index: &LiveIndex) -> Option<Line> {
    let rows = index.rows().map(|row| (Line::Row(row), get_penalty(index.cols().map(|col| costs.get(row, col)))));
    let cols =
        index.cols().map(|col| (Line::Column(col), get_penalty(index.rows().map(|row| costs.get(row, col)))));

    rows.chain(cols)
        .filter_map(|(line, penalty)| penalty.map(|penalty| (line, penalty)))
        .fold(None, |best: Option<(Line, Cost)>, (line, penalty)| match best {
            Some((_, best_penalty)) if penalty <= best_penalty => best,
            _ => Some((line, penalty)),
        })
        .map(|(line, _)| line)
}

/// Returns a difference between two smallest costs. When only one cost is present, it is used
/// as both smallest values, so the penalty is zero.
fn get_penalty(costs: impl Iterator<Item = Cost>) -> Option<Cost> {
    let mut first: Option<Cost> = None;
    let mut second: Option<Cost> = None;

    for cost in costs {
        match first {
            Some(smallest) if cost >= smallest => {
                if second.is_none_or(|second| cost < second) {
                    second = Some(cost);
                }
            }
            _ => {
                second = first;
                first = Some(cost);
            }
        }
    }

    first.map(|first| second.unwrap_or(first) - first)
}

/// Returns a live index with the smallest cost, the first one wins on ties.
fn get_cheapest(indices: impl Iterator<Item = usize>, cost_fn: impl Fn(usize) -> Cost) -> Option<usize> {
    indices.map(|index| (index, cost_fn(index))).min_by_key(|(_, cost)| *cost).map(|(index, _)| index)
}
