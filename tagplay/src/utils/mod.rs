//! Small, reusable helpers: hex formatting for tag identifiers and frame
//! dumps, and timeout/deadline arithmetic.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
