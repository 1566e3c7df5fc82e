//! A collection of models to represent a transportation problem and its allocation.

mod allocation;
pub use self::allocation::Allocation;

mod matrix;
pub use self::matrix::CostMatrix;

mod problem;
pub use self::problem::Problem;
pub(crate) use self::problem::get_total;

/// Specifies an amount of goods: supply capacity, demand requirement or allocated quantity.
pub type Units = u64;

/// Specifies a cost to ship one unit of goods from a source to a destination.
pub type Cost = i64;
