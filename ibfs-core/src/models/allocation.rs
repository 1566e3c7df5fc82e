#[cfg(test)]
#[path = "../../tests/unit/models/allocation_test.rs"]
mod allocation_test;

use crate::models::{CostMatrix, Units};
use crate::utils::GenericResult;

/// Specifies a shipment plan: how many units are shipped from every source to every destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    values: Vec<Units>,
    rows: usize,
    cols: usize,
}

impl Allocation {
    /// Creates a new zero-filled allocation of `rows` x `cols` size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { values: vec![0; rows * cols], rows, cols }
    }

    /// Creates a new allocation from nested rows which must have the same length.
    pub fn from_rows(rows: Vec<Vec<Units>>) -> GenericResult<Self> {
        let cols = rows.first().map_or(0, |row| row.len());

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(format!("dimension mismatch: allocation row {index} has {} cells, expected {cols}", row.len())
                .into());
        }

        let row_count = rows.len();

        Ok(Self { values: rows.into_iter().flatten().collect(), rows: row_count, cols })
    }

    /// Returns amount of rows (sources).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns amount of columns (destinations).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns units allocated at given cell.
    pub fn get(&self, row: usize, col: usize) -> Units {
        self.values[self.index(row, col)]
    }

    /// Adds units to the given cell.
    pub(crate) fn add(&mut self, row: usize, col: usize, units: Units) {
        let index = self.index(row, col);
        self.values[index] += units;
    }

    /// Returns units shipped from every source.
    pub fn row_sums(&self) -> Vec<u128> {
        (0..self.rows).map(|row| (0..self.cols).map(|col| self.get(row, col) as u128).sum()).collect()
    }

    /// Returns units received by every destination.
    pub fn col_sums(&self) -> Vec<u128> {
        (0..self.cols).map(|col| (0..self.rows).map(|row| self.get(row, col) as u128).sum()).collect()
    }

    /// Returns total amount of allocated units.
    pub fn total_units(&self) -> u128 {
        self.values.iter().map(|&units| units as u128).sum()
    }

    /// Returns total shipping cost of the allocation.
    pub fn total_cost(&self, costs: &CostMatrix) -> i128 {
        assert_eq!((self.rows, self.cols), (costs.rows(), costs.cols()), "allocation and costs have different size");

        costs.iter().map(|(row, col, cost)| self.get(row, col) as i128 * cost as i128).sum()
    }

    /// Returns amount of cells with positive allocation. A non-degenerate basic solution
    /// occupies exactly `rows + cols - 1` cells.
    pub fn occupied_cells(&self) -> usize {
        self.values.iter().filter(|&&units| units > 0).count()
    }

    /// Returns allocation as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Units>> {
        if self.cols == 0 {
            return vec![Vec::default(); self.rows];
        }

        self.values.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) is out of {}x{}", self.rows, self.cols);
        row * self.cols + col
    }
}
