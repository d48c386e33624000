// File: src/lib.rs
//
// Library interface for the linbench timing harness.
// Exposes modules for integration testing and external use.

pub mod benchmarks;
pub mod errors;
pub mod ops;
pub mod pipeline;
pub mod problem;
pub mod sink;
