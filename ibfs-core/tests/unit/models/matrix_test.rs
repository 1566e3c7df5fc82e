use super::*;

#[test]
fn can_create_from_rows() {
    let matrix = CostMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();

    assert_eq!(matrix.rows(), 2);
    assert_eq!(matrix.cols(), 3);
    assert_eq!(matrix.get(1, 0), 4);
    assert_eq!(matrix.row(1), &[4, 5, 6]);
}

#[test]
fn can_detect_ragged_rows() {
    let result = CostMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5]]);

    assert_eq!(result.unwrap_err().to_string(), "dimension mismatch: row 1 has 2 costs, expected 3");
}

#[test]
fn can_detect_wrong_amount_of_values() {
    let result = CostMatrix::new(vec![1, 2, 3], 2, 2);

    assert!(result.unwrap_err().to_string().starts_with("dimension mismatch"));
}

#[test]
fn can_iterate_in_row_major_order() {
    let matrix = CostMatrix::new(vec![1, 2, 3, 4], 2, 2).unwrap();

    assert_eq!(matrix.iter().collect::<Vec<_>>(), vec![(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)]);
}

#[test]
#[should_panic]
fn can_panic_when_get_out_of_bounds() {
    let matrix = CostMatrix::new(vec![1, 2, 3, 4], 2, 2).unwrap();

    matrix.get(0, 2);
}
