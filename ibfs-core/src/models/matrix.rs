#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::models::Cost;
use crate::utils::GenericResult;

/// A dense, row-major matrix which stores a cost per unit for every source/destination pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMatrix {
    values: Vec<Cost>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    /// Creates a new instance of `CostMatrix` from row-major values.
    pub fn new(values: Vec<Cost>, rows: usize, cols: usize) -> GenericResult<Self> {
        if values.len() != rows * cols {
            return Err(format!(
                "dimension mismatch: {rows}x{cols} matrix expects {} values, got {}",
                rows * cols,
                values.len()
            )
            .into());
        }

        Ok(Self { values, rows, cols })
    }

    /// Creates a new instance of `CostMatrix` from nested rows which must have the same length.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> GenericResult<Self> {
        let cols = rows.first().map_or(0, |row| row.len());

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(format!("dimension mismatch: row {index} has {} costs, expected {cols}", row.len()).into());
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

    /// Returns a cost at given cell.
    pub fn get(&self, row: usize, col: usize) -> Cost {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) is out of {}x{}", self.rows, self.cols);
        self.values[row * self.cols + col]
    }

    /// Returns costs of the given row.
    pub fn row(&self, row: usize) -> &[Cost] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    /// Returns all cells in row-major order as `(row, col, cost)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cost)> + '_ {
        self.values.iter().enumerate().map(|(index, &cost)| (index / self.cols, index % self.cols, cost))
    }
}
