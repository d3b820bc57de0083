//! Block cipher modes of operation
//!
//! This module implements the ECB, CBC and CTR modes for block ciphers.

pub mod cbc;
pub mod ctr;
pub mod ecb;

// Re-exports
pub use cbc::Cbc;
pub use ctr::{CounterPosition, CounterWindow, Ctr, Keystream};
pub use ecb::Ecb;
