#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use ibfs_core::models::Units;
use ibfs_core::solver::MethodSolution;
use ibfs_core::utils::GenericResult;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

/// Keeps allocations built by all methods.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JsonSolutions {
    /// Solutions in the order methods were run.
    pub solutions: Vec<JsonSolution>,
}

/// An allocation built by a specific method.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSolution {
    /// A method name.
    pub method: String,
    /// Allocated units: one row per source, one column per destination.
    pub allocation: Vec<Vec<Units>>,
    /// Total shipping cost.
    pub total_cost: i64,
    /// Amount of cells with positive allocation.
    pub occupied_cells: usize,
    /// Method duration in milliseconds.
    pub duration: u64,
}

impl TryFrom<&MethodSolution> for JsonSolution {
    type Error = String;

    fn try_from(solution: &MethodSolution) -> Result<Self, Self::Error> {
        let total_cost = i64::try_from(solution.total_cost)
            .map_err(|_| format!("total cost of {} exceeds supported range", solution.method))?;

        Ok(Self {
            method: solution.method.to_string(),
            allocation: solution.allocation.to_rows(),
            total_cost,
            occupied_cells: solution.allocation.occupied_cells(),
            duration: solution.duration.as_millis() as u64,
        })
    }
}

/// Writes solutions in json format.
pub fn write_json_solutions<W: Write>(writer: BufWriter<W>, solutions: &[MethodSolution]) -> GenericResult<()> {
    let solutions = solutions.iter().map(JsonSolution::try_from).collect::<Result<Vec<_>, _>>()?;

    serde_json::to_writer_pretty(writer, &JsonSolutions { solutions })
        .map_err(|err| format!("cannot serialize solutions: '{err}'").into())
}
