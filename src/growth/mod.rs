//! City growth, one random tile at a time

/// Frontier-driven growth loop
pub mod engine;
/// Random tile generation
pub mod generator;

pub use engine::{GrowthConfig, GrowthEngine};
