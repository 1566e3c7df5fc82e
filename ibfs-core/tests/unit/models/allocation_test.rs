use super::*;
use crate::helpers::models::create_example_problem;

fn create_example_allocation() -> Allocation {
    Allocation::from_rows(vec![vec![10, 10, 0, 0], vec![0, 15, 15, 0], vec![0, 0, 10, 15]]).unwrap()
}

#[test]
fn can_create_zero_filled() {
    let allocation = Allocation::new(2, 3);

    assert_eq!(allocation.to_rows(), vec![vec![0, 0, 0], vec![0, 0, 0]]);
    assert_eq!(allocation.total_units(), 0);
    assert_eq!(allocation.occupied_cells(), 0);
}

#[test]
fn can_add_units() {
    let mut allocation = Allocation::new(2, 2);

    allocation.add(1, 0, 5);
    allocation.add(1, 0, 3);

    assert_eq!(allocation.get(1, 0), 8);
    assert_eq!(allocation.row_sums(), vec![0, 8]);
    assert_eq!(allocation.col_sums(), vec![8, 0]);
}

#[test]
fn can_calculate_sums_and_total_cost() {
    let problem = create_example_problem();
    let allocation = create_example_allocation();

    assert_eq!(allocation.row_sums(), vec![20, 30, 25]);
    assert_eq!(allocation.col_sums(), vec![10, 25, 25, 15]);
    assert_eq!(allocation.total_units(), 75);
    assert_eq!(allocation.total_cost(&problem.costs), 750);
    assert_eq!(allocation.occupied_cells(), 6);
}

#[test]
fn can_detect_ragged_rows() {
    let result = Allocation::from_rows(vec![vec![1, 2], vec![3]]);

    assert!(result.is_err());
}

#[test]
fn can_convert_empty_rows() {
    let allocation = Allocation::new(2, 0);

    assert_eq!(allocation.to_rows(), vec![Vec::<Units>::new(), Vec::new()]);
}
