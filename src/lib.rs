//! Workspace-level test harness for fizzbuzz.
//!
//! The crates live under `crates/`; this package only hosts the integration
//! tests in `tests/`.
pub use fizzbuzz_core::*;
