//! Solve command helpers.

pub mod config;

mod formats;
pub use self::formats::*;
