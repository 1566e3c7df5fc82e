//! Import command helpers.

mod csv;
pub use self::csv::*;

mod json;
pub use self::json::*;

use ibfs_core::models::{CostMatrix, Problem};
use ibfs_core::utils::GenericResult;
use std::io::{BufReader, Read};

/// Reads problem from specific format.
pub fn import_problem<R: Read>(input_format: &str, reader: BufReader<R>) -> GenericResult<Problem> {
    match input_format {
        "json" => read_json_problem(reader),
        "csv" => read_csv_problem(reader),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}

/// Returns a problem with 3 sources and 4 destinations which is used to demonstrate IBFS methods.
pub fn create_example_problem() -> GenericResult<Problem> {
    let costs = CostMatrix::from_rows(vec![vec![8, 6, 10, 9], vec![9, 12, 13, 7], vec![14, 9, 16, 5]])?;

    Ok(Problem::new(vec![20, 30, 25], vec![10, 25, 25, 15], costs))
}
