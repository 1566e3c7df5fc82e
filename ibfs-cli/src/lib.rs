//! A crate to find an initial basic feasible solution of a *Transportation Problem* from
//! command line or as a library.
//!
//! It reads problems in `json` or `csv` formats, runs configured IBFS methods and writes their
//! allocations in `json` format.

#![warn(missing_docs)]

pub use ibfs_core;

pub mod extensions;
