//! Import from json format logic.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/json_test.rs"]
mod json_test;

use ibfs_core::models::{Cost, CostMatrix, Problem, Units};
use ibfs_core::utils::GenericResult;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A problem definition in json format.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JsonProblem {
    /// Supply capacity of every source.
    pub supply: Vec<Units>,
    /// Demand requirement of every destination.
    pub demand: Vec<Units>,
    /// Per unit costs: one row per source, one column per destination.
    pub costs: Vec<Vec<Cost>>,
}

impl From<&Problem> for JsonProblem {
    fn from(problem: &Problem) -> Self {
        let costs = (0..problem.costs.rows()).map(|row| problem.costs.row(row).to_vec()).collect();

        Self { supply: problem.supply.clone(), demand: problem.demand.clone(), costs }
    }
}

/// Reads problem from json format.
pub fn read_json_problem<R: Read>(reader: BufReader<R>) -> GenericResult<Problem> {
    let problem: JsonProblem =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize problem: '{err}'"))?;

    let costs = CostMatrix::from_rows(problem.costs)?;

    Ok(Problem::new(problem.supply, problem.demand, costs))
}

/// Writes problem in json format.
pub fn write_json_problem<W: Write>(writer: BufWriter<W>, problem: &Problem) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, &JsonProblem::from(problem))
        .map_err(|err| format!("cannot serialize problem: '{err}'").into())
}
