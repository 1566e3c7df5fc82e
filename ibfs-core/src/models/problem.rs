use crate::models::{CostMatrix, Units};

/// Defines a transportation problem: sources with supply capacities, destinations with
/// demand requirements and per unit costs between them.
///
/// The problem is never modified by solvers: each of them works on its own copy of supply
/// and demand, so the same instance can be passed to many solvers one after another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    /// Supply capacity of every source.
    pub supply: Vec<Units>,
    /// Demand requirement of every destination.
    pub demand: Vec<Units>,
    /// Per unit shipping costs, `supply.len()` x `demand.len()`.
    pub costs: CostMatrix,
}

impl Problem {
    /// Creates a new instance of `Problem`.
    pub fn new(supply: Vec<Units>, demand: Vec<Units>, costs: CostMatrix) -> Self {
        Self { supply, demand, costs }
    }

    /// Returns amount of sources.
    pub fn sources(&self) -> usize {
        self.supply.len()
    }

    /// Returns amount of destinations.
    pub fn destinations(&self) -> usize {
        self.demand.len()
    }

    /// Returns total supply.
    pub fn total_supply(&self) -> u128 {
        get_total(self.supply.as_slice())
    }

    /// Returns total demand.
    pub fn total_demand(&self) -> u128 {
        get_total(self.demand.as_slice())
    }
}

/// Sums units using wide integer, so it never overflows.
pub(crate) fn get_total(units: &[Units]) -> u128 {
    units.iter().map(|&value| value as u128).sum()
}
