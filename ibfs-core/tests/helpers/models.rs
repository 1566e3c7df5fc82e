use crate::models::{Cost, CostMatrix, Problem, Units};

pub fn create_problem(supply: Vec<Units>, demand: Vec<Units>, costs: Vec<Vec<Cost>>) -> Problem {
    Problem::new(supply, demand, CostMatrix::from_rows(costs).expect("cannot create cost matrix"))
}

/// Returns a problem with 3 sources and 4 destinations used across many tests.
pub fn create_example_problem() -> Problem {
    create_problem(
        vec![20, 30, 25],
        vec![10, 25, 25, 15],
        vec![vec![8, 6, 10, 9], vec![9, 12, 13, 7], vec![14, 9, 16, 5]],
    )
}
