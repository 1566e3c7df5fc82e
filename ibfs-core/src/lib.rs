//! Core crate contains building blocks to find an initial basic feasible solution (IBFS) of a
//! balanced ***Transportation Problem***.
//!
//! A problem is defined by supply capacities of `m` sources, demand requirements of `n`
//! destinations and a cost per unit for every source/destination pair. Three heuristics are
//! provided:
//!
//! - **North-West Corner**: fills the allocation table starting from the top-left cell, costs are ignored.
//! - **Vogel's Approximation**: allocates at the cheapest cell of a row or column with the largest penalty.
//! - **Russell's Approximation**: allocates at the cell with the largest discrepancy between its cost
//!   and row/column potentials.
//!
//! All methods produce a feasible, but not necessarily optimal, shipment plan.
//!
//! # Examples
//!
//! ```
//! use ibfs_core::models::{CostMatrix, Problem};
//! use ibfs_core::solver::{MethodType, Builder};
//!
//! let costs = CostMatrix::from_rows(vec![vec![8, 6, 10, 9], vec![9, 12, 13, 7], vec![14, 9, 16, 5]])?;
//! let problem = Problem::new(vec![20, 30, 25], vec![10, 25, 25, 15], costs);
//!
//! let solutions = Builder::default().with_methods(vec![MethodType::NorthWestCorner]).build().run(&problem)?;
//!
//! assert_eq!(solutions[0].allocation.to_rows(), vec![vec![10, 10, 0, 0], vec![0, 15, 15, 0], vec![0, 0, 10, 15]]);
//! # Ok::<(), ibfs_core::utils::GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub mod checker;
pub mod models;
pub mod solver;
pub mod utils;
pub mod validation;
