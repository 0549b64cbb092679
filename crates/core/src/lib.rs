//! fizzbuzz-core - generalized fizzbuzz sequence generation
//!
//! This crate provides functionality to:
//! - Label a single integer under two configurable moduli (fizz and buzz)
//! - Generate the ordered labels of an inclusive integer range
pub mod error;
pub mod sequence;

// Re-export commonly used types
pub use error::{Error, Result};
pub use sequence::{
    DEFAULT_BUZZ, DEFAULT_FIZZ, Label, Moduli, SequenceGenerator, classify, generate, sequence_len,
};
