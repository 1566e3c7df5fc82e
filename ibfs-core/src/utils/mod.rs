//! A collection of various utility helpers.

mod bitvec;
pub use self::bitvec::BitVec;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod timing;
pub use self::timing::Timer;
