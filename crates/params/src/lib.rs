//! Constant values for the rijndael AES engine
//!
//! This crate carries the fixed sizes and round counts shared by the
//! algorithm and facade crates.

#![no_std]

pub mod utils;
