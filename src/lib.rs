//! Procedural city growth from edge-matched tiles with instanced asset batching
//!
//! Tiles carry a road or zone description on each side. Growth keeps a
//! frontier of cells that open roads point into, fills it one random
//! tile at a time under road-continuity rules, and streams every placed
//! tile into instance batches shaped for instanced GPU drawing.

#![forbid(unsafe_code)]

/// Asset catalog with mesh parts, palettes, and zone decoration tables
pub mod catalog;
/// Frontier-driven growth loop and random tile generation
pub mod growth;
/// Input/output operations and error handling
pub mod io;
/// Layout resolution from tile sides to asset placements
pub mod layout;
/// Transform and bounding-box utilities
pub mod math;
/// Instanced rendering backend
pub mod render;
/// Tile model, grid placement, and the road frontier
pub mod world;

pub use io::error::{CityError, Result};
