//! Asset catalog describing what the city is built from
//!
//! The catalog is pure configuration: mesh parts with their baked local
//! transforms and bounds, per-asset colour palettes, the road piece set,
//! and the decoration tables that dress suburban and commercial zones.

/// Asset definitions, palettes, and zone decoration tables
pub mod asset;
/// Built-in catalog for the demo city asset pack
pub mod presets;

pub use asset::AssetLibrary;
