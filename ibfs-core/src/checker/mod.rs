//! This module provides functionality to automatically check that given allocation is feasible
//! which means that every source ships exactly its supply and every destination receives
//! exactly its demand.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::models::{Allocation, Problem};

/// Checks allocation against the problem and returns all found violations.
pub fn check_allocation(problem: &Problem, allocation: &Allocation) -> Result<(), Vec<String>> {
    let expected = (problem.sources(), problem.destinations());
    let actual = (allocation.rows(), allocation.cols());

    if expected != actual {
        return Err(vec![format!(
            "dimension mismatch: allocation is {}x{}, expected {}x{}",
            actual.0, actual.1, expected.0, expected.1
        )]);
    }

    let row_errors = allocation
        .row_sums()
        .into_iter()
        .zip(problem.supply.iter())
        .enumerate()
        .filter(|(_, (shipped, supply))| *shipped != **supply as u128)
        .map(|(row, (shipped, supply))| format!("source {row} ships {shipped} units, but its supply is {supply}"));

    let col_errors = allocation
        .col_sums()
        .into_iter()
        .zip(problem.demand.iter())
        .enumerate()
        .filter(|(_, (received, demand))| *received != **demand as u128)
        .map(|(col, (received, demand))| {
            format!("destination {col} receives {received} units, but its demand is {demand}")
        });

    let errors = row_errors.chain(col_errors).collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
