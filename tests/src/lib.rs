//! Test vectors and shared helpers for the rijndael test suites
pub mod vectors;

pub use vectors::{AesVector, Direction, VectorError};
