//! Tile model and the grid placement engine
//!
//! This module contains the city-model side of the crate:
//! - Directions, rotations, and the side arithmetic between them
//! - Tiles and the edges they expose
//! - The sparse grid with its edge-matching rules and road frontier

/// Cardinal directions and quarter-turn rotations
pub mod direction;
/// The placement grid, road frontier, and renderer seam
pub mod grid;
/// Tiles, edges, and zone kinds
pub mod tile;

pub use grid::World;
