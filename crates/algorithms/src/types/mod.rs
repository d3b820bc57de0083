//! Type-safe wrappers for key and IV material
//!
//! Fixed-size containers that carry their length in the type, compare in
//! constant time and zeroize themselves when dropped.

pub mod key;
pub mod nonce;

pub use key::SecretBytes;
pub use nonce::{Iv, Nonce};
